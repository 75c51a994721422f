//! Page translators: one linear assembly per top-level page kind.

pub(crate) mod article;
pub(crate) mod symbol;
pub(crate) mod technology;
pub(crate) mod tutorial;
pub(crate) mod tutorial_article;
