pub(crate) mod atoms;
pub(crate) mod footer;
pub(crate) mod locale_menu;
pub(crate) mod shell;
pub(crate) mod splash;
