//*** START FILE: src/main.rs ***//
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::{egui, App, NativeOptions};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use madlib_form_gui::config::{self, Config};
use madlib_form_gui::error::FormError;
use madlib_form_gui::modal::Display;
use madlib_form_gui::story::Catalog;
use madlib_form_gui::story_io::load_catalog;
use madlib_form_gui::types::story_data::{Segment, StoryRecord};
use madlib_form_gui::{Category, FormModel, SelectorTable};

#[derive(Parser, Debug, Clone)]
#[command(name = "madlib-form", about = "Mad Libs form with dynamic field rows and a word picker")]
struct Cli {
    /// Path to the form configuration
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Open the story with this id
    #[arg(long, conflicts_with = "story_title")]
    story_id: Option<u32>,

    /// Open the story with this exact title
    #[arg(long)]
    story_title: Option<String>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(long)]
    debug: bool,
}

// Clicks collected during a frame and applied once rendering is done.
enum Action {
    AddRow(usize),
    RemoveRow(usize, String),
    SetValue(usize, String, String),
    OpenPicker(String),
    PickWord(Category, String),
    ClosePicker,
    SelectStory(u32),
    Submit,
}

struct MadLibApp {
    table: SelectorTable,
    config: Option<Config>,
    catalog: Catalog,
    form: Option<FormModel>,
    load_error: Option<String>,
    action_error: Option<String>,
    submission_output: String,
}

fn pick_story<'c>(catalog: &'c Catalog, cli: &Cli) -> Result<&'c StoryRecord, FormError> {
    let record = match (&cli.story_id, &cli.story_title) {
        (Some(id), _) => catalog.by_id(*id)?,
        (None, Some(title)) => catalog.by_title(title)?,
        (None, None) => catalog.first()?,
    };
    Ok(record)
}

fn load(cli: &Cli) -> Result<(Config, Catalog, FormModel), FormError> {
    let config = config::load_config_from_file(&cli.config)?;
    let catalog = load_catalog(&config.stories_path())?;
    let record = pick_story(&catalog, cli)?;
    let form = FormModel::from_config(&config, record)?;
    Ok((config, catalog, form))
}

impl MadLibApp {
    fn new(_cc: &eframe::CreationContext<'_>, cli: &Cli) -> Self {
        let mut app = Self {
            table: SelectorTable::standard(),
            config: None,
            catalog: Catalog::default(),
            form: None,
            load_error: None,
            action_error: None,
            submission_output: String::new(),
        };

        match load(cli) {
            Ok((config, catalog, form)) => {
                info!(story = %form.story.title, groups = form.groups.len(), "form ready");
                app.config = Some(config);
                app.catalog = catalog;
                app.form = Some(form);
            }
            Err(e) => {
                error!("Error loading form: {}", e);
                app.load_error = Some(e.to_string());
            }
        }
        app
    }

    fn switch_story(&mut self, id: u32) -> Result<(), FormError> {
        let Some(config) = &self.config else { return Ok(()) };
        let record = self.catalog.by_id(id)?;
        self.form = Some(FormModel::from_config(config, record)?);
        self.submission_output.clear();
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        let result: Result<(), FormError> = match action {
            Action::SelectStory(id) => self.switch_story(id),
            action => {
                let Some(form) = self.form.as_mut() else { return };
                match action {
                    Action::AddRow(g) => form.add_row(g).map(|_| ()).map_err(FormError::from),
                    Action::RemoveRow(g, id) => form.remove_row(g, &id).map(|_| ()).map_err(FormError::from),
                    Action::SetValue(g, id, value) => form.set_value(g, &id, value).map_err(FormError::from),
                    Action::OpenPicker(id) => form.click_placeholder(&self.table, &id).map(|_| ()).map_err(FormError::from),
                    Action::PickWord(category, word) => {
                        form.click_option(&self.table, category, &word).map(|_| ()).map_err(FormError::from)
                    }
                    Action::ClosePicker => {
                        form.modal.close();
                        Ok(())
                    }
                    Action::Submit => form.submission_json().map(|json| self.submission_output = json),
                    Action::SelectStory(_) => Ok(()),
                }
            }
        };
        match result {
            Ok(()) => self.action_error = None,
            Err(e) => {
                warn!("{}", e);
                self.action_error = Some(e.to_string());
            }
        }
    }

    fn show_groups(form: &FormModel, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        for (g, group) in form.groups.iter().enumerate() {
            ui.heading(&group.label);
            for row in group.rows() {
                ui.horizontal(|ui| {
                    let mut value = row.value.clone();
                    let edit = egui::TextEdit::singleline(&mut value)
                        .id_source(&row.id)
                        .hint_text(&row.name);
                    if ui.add(edit).changed() {
                        actions.push(Action::SetValue(g, row.id.clone(), value));
                    }
                    if row.is_missing() {
                        ui.colored_label(egui::Color32::RED, "*");
                    }
                    if row.removable && ui.button("−").clicked() {
                        actions.push(Action::RemoveRow(g, row.id.clone()));
                    }
                });
            }
            if ui.add_enabled(!group.is_full(), egui::Button::new("+")).clicked() {
                actions.push(Action::AddRow(g));
            }
            ui.separator();
        }
    }

    fn show_story(form: &FormModel, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.heading(&form.story.title);
        ui.horizontal_wrapped(|ui| {
            for segment in form.story.segments() {
                match segment {
                    Segment::Text(text) => {
                        ui.label(text);
                    }
                    Segment::Placeholder { id, category } => {
                        if ui.link(form.story.display_text(id, *category)).clicked() {
                            actions.push(Action::OpenPicker(id.clone()));
                        }
                    }
                }
            }
        });
    }

    fn show_picker(&self, form: &FormModel, ctx: &egui::Context, actions: &mut Vec<Action>) {
        if !form.modal.is_open() {
            return;
        }
        egui::Window::new("Pick a word")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                for pane in form.modal.panes().iter().filter(|p| p.display == Display::Visible) {
                    let scope = self.table.get(pane.category).options_selector;
                    ui.label(pane.category.name());
                    egui::ScrollArea::vertical().id_source(scope).max_height(300.0).show(ui, |ui| {
                        let words = form.story.words(pane.category);
                        if words.is_empty() {
                            ui.label("No words for this category.");
                        }
                        for word in words {
                            if ui.button(word).clicked() {
                                actions.push(Action::PickWord(pane.category, word.clone()));
                            }
                        }
                    });
                }
                ui.separator();
                if ui.button("Cancel").clicked() {
                    actions.push(Action::ClosePicker);
                }
            });
    }
}

impl App for MadLibApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<Action> = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() { ctx.send_viewport_cmd(egui::ViewportCommand::Close); }
                });
            });
        });

        egui::SidePanel::left("side_panel_left").min_width(250.0).default_width(320.0).show(ctx, |ui| {
            ui.heading("Stories"); ui.separator();
            if let Some(err) = &self.load_error {
                ui.colored_label(egui::Color32::RED, format!("Load: {}", err));
            }
            let current = self.form.as_ref().map(|f| f.story.title.clone());
            for story in self.catalog.stories() {
                let is_selected = current.as_deref() == Some(story.title.as_str());
                if ui.selectable_label(is_selected, &story.title).clicked() && !is_selected {
                    actions.push(Action::SelectStory(story.id));
                }
            }
            ui.separator();

            if self.form.is_some() && ui.button("Submit").clicked() {
                actions.push(Action::Submit);
            }
            if let Some(err) = &self.action_error { ui.colored_label(egui::Color32::RED, err); }

            if let Some(form) = &self.form {
                let missing = form.missing_required();
                if !missing.is_empty() {
                    ui.colored_label(egui::Color32::RED, format!("Required: {}", missing.join(", ")));
                }
            }
            ui.separator();

            ui.collapsing("Submission (JSON)", |ui| {
                egui::ScrollArea::vertical().id_source("submission_scroll").max_height(400.0).show(ui, |ui| {
                    let mut s_display = self.submission_output.clone();
                    ui.add(egui::TextEdit::multiline(&mut s_display)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .interactive(false)
                        .frame(false));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.form {
                Some(form) => {
                    egui::ScrollArea::vertical().id_source("form_scroll").auto_shrink([false, false]).show(ui, |ui| {
                        Self::show_groups(form, ui, &mut actions);
                        Self::show_story(form, ui, &mut actions);
                    });
                }
                None => { ui.label("No form loaded (see side panel)."); }
            }
        });

        if let Some(form) = &self.form {
            self.show_picker(form, ctx, &mut actions);
        }

        for action in actions {
            self.apply(action);
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).compact().try_init() {
        eprintln!("tracing already initialised: {}", e);
    }
}

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Mad Libs Form",
        options,
        Box::new(move |cc| Box::new(MadLibApp::new(cc, &cli)))
    )
}
//*** END FILE: src/main.rs ***//
