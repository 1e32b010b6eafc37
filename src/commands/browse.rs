//! Browse command - interactive tag filter and GIF picker
//!
//! Loops over three prompts: pick a tag filter, pick a GIF from the visible
//! list, pick an action for it. Escape backs out one level.

use super::{Context, actions, tag};
use crate::gallery::{Gallery, GifItem};
use crate::{GifrError, output};
use dialoguer::{Select, theme::ColorfulTheme};

type Result<T> = std::result::Result<T, GifrError>;

const ALL_GIFS: &str = "All GIFs";

/// What to do with the picked GIF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    CopyPath,
    Open,
    EditTags,
    Details,
    ResetRanking,
}

impl BrowseAction {
    pub const ALL: [Self; 5] = [
        Self::CopyPath,
        Self::Open,
        Self::EditTags,
        Self::Details,
        Self::ResetRanking,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CopyPath => "Copy file path",
            Self::Open => "Open",
            Self::EditTags => "Edit tags",
            Self::Details => "Show details",
            Self::ResetRanking => "Reset ranking",
        }
    }
}

/// Entries of the tag prompt: "All GIFs" followed by the tag universe
#[must_use]
pub fn tag_choices(gallery: &Gallery) -> Vec<String> {
    std::iter::once(ALL_GIFS.to_string())
        .chain(gallery.tag_universe().iter().cloned())
        .collect()
}

/// Apply the tag prompt selection to the gallery
pub fn apply_tag_choice(gallery: &mut Gallery, choices: &[String], index: usize) {
    match choices.get(index) {
        Some(tag) if index > 0 => gallery.select_tag(tag.clone()),
        _ => gallery.clear_tag(),
    }
}

/// Execute the browse command
///
/// # Errors
/// Returns an error if the gallery cannot be loaded or a prompt fails
pub fn execute(ctx: &Context<'_>, initial_tag: Option<&str>) -> Result<()> {
    let mut gallery = ctx.load_gallery()?;
    if gallery.items().is_empty() {
        if !ctx.quiet {
            println!("No GIFs found in {}.", gallery.folder().display());
        }
        return Ok(());
    }

    let mut pick_tag = initial_tag.is_none();
    if let Some(tag) = initial_tag {
        gallery.select_tag(tag.trim().to_lowercase());
    }

    loop {
        if pick_tag {
            let choices = tag_choices(&gallery);
            let Some(index) = select("Filter by tag", &choices, 0)? else {
                return Ok(());
            };
            apply_tag_choice(&mut gallery, &choices, index);
        }
        pick_tag = true;

        let visible: Vec<GifItem> = gallery.visible().into_iter().cloned().collect();
        if visible.is_empty() {
            println!("No GIFs tagged '{}'.", gallery.selected_tag().unwrap_or_default());
            continue;
        }

        let rows: Vec<String> = visible.iter().map(|item| output::item_with_tags(item, false)).collect();
        let Some(index) = select("GIF", &rows, 0)? else {
            continue;
        };
        let item = &visible[index];

        let labels: Vec<&str> = BrowseAction::ALL.iter().map(|a| a.label()).collect();
        let Some(action) = select("Action", &labels, 0)? else {
            continue;
        };

        match BrowseAction::ALL[action] {
            BrowseAction::CopyPath => actions::copy_path(ctx, item)?,
            BrowseAction::Open => actions::open_item(ctx, item)?,
            BrowseAction::EditTags => {
                let input = tag::prompt_tags(item)?;
                // A failed save was already reported; keep browsing.
                if tag::save_tags(ctx, &item.id, &input).is_ok() {
                    gallery = reload(ctx, gallery.selected_tag())?;
                }
            }
            BrowseAction::Details => println!("{}\n", output::item_details(item)),
            BrowseAction::ResetRanking => {
                actions::reset_ranking(ctx, item)?;
                gallery = reload(ctx, gallery.selected_tag())?;
            }
        }
    }
}

fn reload(ctx: &Context<'_>, selected: Option<&str>) -> Result<Gallery> {
    let selected = selected.map(String::from);
    let mut gallery = ctx.load_gallery()?;
    if let Some(tag) = selected {
        gallery.select_tag(tag);
    }
    Ok(gallery)
}

fn select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<Option<usize>> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(|e| GifrError::InvalidInput(format!("Selection failed: {e}")))
}
