//! Recipe view rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::layout::{recipe_columns, results_layout};
use crate::app::state::RecipePane;
use crate::app::{App, RecipeViewState};
use crate::recipe::Recipe;

impl App {
    /// Renders the recipe view: checklist column and details column.
    pub(crate) fn render_recipe(&self, frame: &mut Frame) {
        let (Some(recipe), Some(view)) = (&self.recipe, &self.view) else {
            return;
        };

        let layout = results_layout(frame.area());
        self.render_search_bar(frame, layout.search, false);

        let columns = recipe_columns(layout.body);
        self.render_ingredients(frame, columns.ingredients, recipe, view);
        self.render_details(frame, columns.details, recipe, view);

        let hints: &[(&str, &str)] = match view.focus {
            RecipePane::Ingredients => &[
                ("Space", "Check off  "),
                ("↑/↓", "Select  "),
                ("Tab", "Method  "),
                ("/", "New search"),
            ],
            RecipePane::Method if !view.cooking => &[
                ("Enter", "Start Cooking  "),
                ("Tab", "Ingredients  "),
                ("/", "New search"),
            ],
            RecipePane::Method => &[
                ("←/→", "Steps  "),
                ("t", "Tip  "),
                ("Tab", "Ingredients  "),
                ("/", "New search"),
            ],
        };
        self.render_footer(frame, layout.footer, hints);
    }

    /// Renders the ingredient checklist.
    fn render_ingredients(
        &self,
        frame: &mut Frame,
        area: Rect,
        recipe: &Recipe,
        view: &RecipeViewState,
    ) {
        let focused = view.focus == RecipePane::Ingredients;
        let border_style = if focused {
            self.theme.highlight_style()
        } else {
            self.theme.border_style()
        };

        let mut lines = Vec::with_capacity(recipe.ingredients.len());
        for (i, ingredient) in recipe.ingredients.iter().enumerate() {
            let checked = view.checked.get(i).copied().unwrap_or(false);
            let marker = if checked { "[x] " } else { "[ ] " };

            let text_style = if checked {
                self.theme.checked_style()
            } else {
                self.theme.normal_style()
            };
            let marker_style = if focused && i == view.selected_ingredient {
                self.theme.highlight_style()
            } else {
                self.theme.muted_style()
            };

            lines.push(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(format!("{} ", ingredient.amount), text_style.bold()),
                Span::styled(
                    format!("{} ({})", ingredient.common_name, ingredient.english_name),
                    text_style,
                ),
            ]));
        }

        let list = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Ingredients ")
                    .title_style(self.theme.header_style())
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(list, area);
    }

    /// Renders the details column: header, equipment, method, notes.
    fn render_details(
        &self,
        frame: &mut Frame,
        area: Rect,
        recipe: &Recipe,
        view: &RecipeViewState,
    ) {
        let focused = view.focus == RecipePane::Method;
        let border_style = if focused {
            self.theme.highlight_style()
        } else {
            self.theme.border_style()
        };

        let mut lines = Vec::new();

        // Dish header
        lines.push(Line::from(Span::styled(
            recipe.dish_name.clone(),
            self.theme.header_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", recipe.description),
            self.theme.tip_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("⏱  {}", recipe.prep_time),
            self.theme.badge_style(),
        )));
        lines.push(Line::from(""));

        // Equipment
        lines.push(Line::from(Span::styled(
            "Equipment",
            self.theme.header_style(),
        )));
        for tool in &recipe.equipment {
            lines.push(Line::from(vec![
                Span::styled("  ‣ ", self.theme.highlight_style()),
                Span::styled(tool.item.clone(), self.theme.normal_style()),
            ]));
            if tool.is_specialized {
                lines.push(Line::from(Span::styled(
                    "      Heads up! This one is specialized.",
                    self.theme.tip_style(),
                )));
                if let Some(alternative) = &tool.alternative {
                    lines.push(Line::from(Span::styled(
                        format!("      Alternative: {alternative}"),
                        self.theme.tip_style(),
                    )));
                }
            }
        }
        lines.push(Line::from(""));

        // Method
        lines.push(Line::from(Span::styled("Method", self.theme.header_style())));
        if view.cooking {
            self.push_stepper_lines(&mut lines, recipe, view);
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  ▶ Start Cooking  [Enter]",
                self.theme.highlight_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!("    {} guided steps await", recipe.method.len()),
                self.theme.muted_style(),
            )));
        }
        lines.push(Line::from(""));

        // Notes
        if !recipe.notes.is_empty() {
            lines.push(Line::from(Span::styled(
                "Notes & Tips",
                self.theme.header_style(),
            )));
            for note in &recipe.notes {
                lines.push(Line::from(vec![
                    Span::styled("  • ", self.theme.highlight_style()),
                    Span::styled(note.clone(), self.theme.normal_style()),
                ]));
            }
        }

        let details = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((view.scroll, 0))
            .block(
                Block::default()
                    .title(" Recipe ")
                    .title_style(self.theme.header_style())
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(details, area);
    }

    /// Appends the guided-step display to the details lines.
    fn push_stepper_lines(&self, lines: &mut Vec<Line<'_>>, recipe: &Recipe, view: &RecipeViewState) {
        let total = recipe.method.len();
        let Some(step) = recipe.method.get(view.step_index) else {
            return;
        };

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  STEP {} OF {total}", view.step_index + 1),
            self.theme.highlight_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", step.instruction),
            self.theme.normal_style(),
        )));

        if let Some(tip) = &step.tip {
            if view.tip_open {
                lines.push(Line::from(Span::styled(
                    format!("  ▾ {}", tip.title),
                    self.theme.tip_style(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("    {}", tip.content),
                    self.theme.tip_style(),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    format!("  ▸ {}  [t]", tip.title),
                    self.theme.tip_style(),
                )));
            }
        }

        lines.push(Line::from(""));
        let nav = if view.is_last_step(total) {
            Line::from(vec![
                Span::styled("  [←] ", self.theme.highlight_style()),
                Span::styled("Previous   ", self.theme.muted_style()),
                Span::styled("[Enter] ", self.theme.highlight_style()),
                Span::styled("I'm Done Cooking", self.theme.success_style()),
            ])
        } else if view.is_first_step() {
            Line::from(vec![
                Span::styled("  [→] ", self.theme.highlight_style()),
                Span::styled("Next", self.theme.muted_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled("  [←] ", self.theme.highlight_style()),
                Span::styled("Previous   ", self.theme.muted_style()),
                Span::styled("[→] ", self.theme.highlight_style()),
                Span::styled("Next", self.theme.muted_style()),
            ])
        };
        lines.push(nav);
    }
}
