use super::theme::{Theme, ThemeSet};
use console::{Color, Style};
use once_cell::sync::Lazy;

pub mod names {
    pub const INDEX: &str = "index";
    pub const TITLE: &str = "title";
    pub const PREVIEW: &str = "preview";
    pub const RULE: &str = "rule";
    pub const PROMPT: &str = "prompt";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static SNIPZ_THEMES: Lazy<ThemeSet> = Lazy::new(|| ThemeSet {
    light: Theme::new()
        .add(names::INDEX, Style::new().fg(Color::Color256(25)))
        .add(names::TITLE, Style::new().bold().fg(Color::Color256(235)))
        .add(names::PREVIEW, Style::new().fg(Color::Color256(243)).italic())
        .add(names::RULE, Style::new().fg(Color::Color256(250)))
        .add(names::PROMPT, Style::new().fg(Color::Color256(25)).bold())
        .add(names::INFO, Style::new().fg(Color::Color256(243)))
        .add(names::SUCCESS, Style::new().fg(Color::Color256(28)))
        .add(names::WARNING, Style::new().fg(Color::Color256(130)))
        .add(names::ERROR, Style::new().fg(Color::Color256(160)).bold()),
    dark: Theme::new()
        .add(names::INDEX, Style::new().yellow())
        .add(names::TITLE, Style::new().bold().white())
        .add(names::PREVIEW, Style::new().fg(Color::Color256(245)).italic())
        .add(names::RULE, Style::new().fg(Color::Color256(240)))
        .add(names::PROMPT, Style::new().cyan().bold())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold()),
});
