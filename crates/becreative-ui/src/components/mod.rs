pub(crate) mod accordion;
pub(crate) mod code_block;
pub(crate) mod copy_button;
pub(crate) mod hooks;
pub(crate) mod icons;
pub(crate) mod shell;
pub(crate) mod toast;
