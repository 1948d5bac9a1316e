use console::Style;
use once_cell::sync::Lazy;

pub static SECTION_HEADER: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static SHORT_ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(247).italic());
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static RULE_NAME: Lazy<Style> = Lazy::new(|| Style::new().cyan());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
