//! Interactive mode.
//!
//! Shows the generator view and lets the user change the city or the
//! alternative from `dialoguer` menus until they quit. Menu choices map
//! straight to dataset records by position.

use dialoguer::Select;
use police_budget_selection::SelectionState;

use crate::render::{self, DataSection};

/// Title reported when the generator view is first shown.
pub const GENERATOR_PAGE: &str = "generator";

/// Title reported when the data view is first shown.
pub const DATA_PAGE: &str = "data";

/// Actions offered below the generator view.
enum MenuAction {
    ChangeCity,
    ChangeAlternative,
    ViewData,
    Quit,
}

impl MenuAction {
    const ALL: &[Self] = &[
        Self::ChangeCity,
        Self::ChangeAlternative,
        Self::ViewData,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ChangeCity => "Change city",
            Self::ChangeAlternative => "Change alternative",
            Self::ViewData => "View data & sources",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the interactive loop on `state`.
///
/// # Errors
///
/// Returns an error if reading a menu choice from the terminal fails.
pub fn run(state: &mut SelectionState<'_>, colors: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = state.dataset();
    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();
    let mut data_viewed = false;

    state.view_page(GENERATOR_PAGE);

    loop {
        println!();
        print!("{}", render::generator_view(state.comparison(), colors));
        println!();

        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuAction::ALL[idx] {
            MenuAction::ChangeCity => {
                let cities: Vec<String> = dataset.cities().iter().map(|c| c.label()).collect();
                let current = position(dataset.cities(), state.city());

                let choice = Select::new()
                    .with_prompt("Which city?")
                    .items(&cities)
                    .default(current)
                    .max_length(10)
                    .interact()?;

                state.select_city(&dataset.cities()[choice]);
            }
            MenuAction::ChangeAlternative => {
                let names: Vec<&str> = dataset
                    .alternatives()
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect();
                let current = position(dataset.alternatives(), state.alternative());

                let choice = Select::new()
                    .with_prompt("Pay for what instead?")
                    .items(&names)
                    .default(current)
                    .max_length(10)
                    .interact()?;

                state.select_alternative(&dataset.alternatives()[choice]);
            }
            MenuAction::ViewData => {
                if !data_viewed {
                    state.view_page(DATA_PAGE);
                    data_viewed = true;
                }
                println!();
                print!("{}", render::data_view(dataset, DataSection::ALL, colors));
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// Index of `item` in `items` by identity, or 0 if it is not there.
fn position<T>(items: &[T], item: &T) -> usize {
    items
        .iter()
        .position(|candidate| std::ptr::eq(candidate, item))
        .unwrap_or(0)
}
