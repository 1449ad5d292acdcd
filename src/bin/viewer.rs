// src/bin/viewer.rs

use eframe::egui;
use egui::{Align2, RichText, Sense};
use watchlist_viewer::WatchlistStore;

/// Which modal is currently on screen. At most one at a time, exactly like
/// a stacked sheet presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveDialog {
    None,
    /// The "Watchlists" sheet behind the add button: Add new / Delete
    /// Watchlist / Cancel.
    ManageSheet,
    /// One button per existing watchlist plus Cancel; what a click does
    /// depends on the mode that opened the picker.
    Picker(PickerMode),
    /// Free-text name prompt feeding `add_new_watchlist`.
    NameEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerMode {
    Select,
    Delete,
}

struct ViewerApp {
    // World state
    store: WatchlistStore,

    // UI state for the app itself
    search_query: String,
    pending_name: String,
    active_dialog: ActiveDialog,
}

impl ViewerApp {
    fn new(store: WatchlistStore) -> Self {
        Self {
            store,
            search_query: String::new(),
            pending_name: String::new(),
            active_dialog: ActiveDialog::None,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.toolbar(ui);
            ui.separator();
            self.section_header(ui);
            self.stock_table(ui);
        });

        match self.active_dialog {
            ActiveDialog::None => {}
            ActiveDialog::ManageSheet => self.show_manage_sheet(ctx),
            ActiveDialog::Picker(mode) => self.show_watchlist_picker(ctx, mode),
            ActiveDialog::NameEntry => self.show_name_entry(ctx),
        }
    }
}

impl ViewerApp {
    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Watchlist");
            ui.add_space(20.0);

            // The search field is a stub: the query is kept but never
            // filters the table.
            ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Search Symbols")
                    .desired_width(180.0),
            );

            if ui.button("Refresh").clicked() {
                // Nothing to fetch; the mock rows are static.
            }

            if ui.button("+").clicked() {
                self.active_dialog = ActiveDialog::ManageSheet;
            }
        });
    }

    /// The section header: the active watchlist's name, left-aligned and
    /// clickable. Hidden while no watchlist exists so a stale selection
    /// never indexes past the end.
    fn section_header(&mut self, ui: &mut egui::Ui) {
        let selected_name = self.store.selected_watchlist().map(|w| w.name.clone());
        let Some(name) = selected_name else { return };

        let response = ui.add(
            egui::Label::new(RichText::new(name).strong().size(16.0)).sense(Sense::click()),
        );
        if response.clicked() {
            self.active_dialog = ActiveDialog::Picker(PickerMode::Select);
        }
        ui.separator();
    }

    /// One row per stock: symbol, bid, ask, last in four equally
    /// distributed, center-aligned columns.
    fn stock_table(&mut self, ui: &mut egui::Ui) {
        let col_width = ui.available_width() / 4.0;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                egui::Grid::new("stocks_grid")
                    .num_columns(4)
                    .min_col_width(col_width)
                    .spacing([0.0, 6.0])
                    .show(ui, |ui| {
                        for caption in ["Symbol", "Bid", "Ask", "Last"] {
                            centered_cell(ui, RichText::new(caption).strong());
                        }
                        ui.end_row();

                        for row in self.store.stocks() {
                            centered_cell(ui, RichText::new(&row.symbol));
                            centered_cell(ui, RichText::new(&row.bid_price));
                            centered_cell(ui, RichText::new(&row.ask_price));
                            centered_cell(ui, RichText::new(&row.last_price));
                            ui.end_row();
                        }
                    });
            });
    }

    fn show_manage_sheet(&mut self, ctx: &egui::Context) {
        egui::Window::new("Watchlists")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                if ui.button("Add new").clicked() {
                    self.pending_name.clear();
                    self.active_dialog = ActiveDialog::NameEntry;
                }
                if ui.button("Delete Watchlist").clicked() {
                    self.active_dialog = ActiveDialog::Picker(PickerMode::Delete);
                }
                if ui.button("Cancel").clicked() {
                    self.active_dialog = ActiveDialog::None;
                }
            });
    }

    fn show_watchlist_picker(&mut self, ctx: &egui::Context, mode: PickerMode) {
        // Snapshot ids and names up front; a click mutates the store.
        let entries: Vec<(String, String)> = self
            .store
            .watchlists()
            .iter()
            .map(|w| (w.id.clone(), w.name.clone()))
            .collect();

        egui::Window::new("Watchlists")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                for (id, name) in &entries {
                    if ui.button(name).clicked() {
                        match mode {
                            PickerMode::Select => self.store.select_watchlist(id),
                            PickerMode::Delete => self.store.delete_watchlist(id),
                        }
                        self.active_dialog = ActiveDialog::None;
                    }
                }
                if ui.button("Cancel").clicked() {
                    self.active_dialog = ActiveDialog::None;
                }
            });
    }

    fn show_name_entry(&mut self, ctx: &egui::Context) {
        egui::Window::new("Enter Name")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.pending_name).hint_text("Name"),
                );
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        let name = std::mem::take(&mut self.pending_name);
                        self.store.add_new_watchlist(name);
                        self.active_dialog = ActiveDialog::None;
                    }
                    if ui.button("Cancel").clicked() {
                        self.active_dialog = ActiveDialog::None;
                    }
                });
            });
    }
}

fn centered_cell(ui: &mut egui::Ui, text: RichText) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
        ui.label(text);
    });
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt().init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 680.0])
            .with_title("Watchlist"),
        ..Default::default()
    };

    eframe::run_native(
        "Watchlist Viewer App",
        native_options,
        Box::new(|cc| {
            let mut store = WatchlistStore::new();
            // Repaint whenever the store mutates, whichever gesture caused it.
            let repaint_ctx = cc.egui_ctx.clone();
            store.subscribe(move |_| repaint_ctx.request_repaint());
            store.load();
            Box::new(ViewerApp::new(store))
        }),
    )
}
