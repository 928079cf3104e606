pub mod notices;
pub mod scheme_list;
pub mod scheme_modal;
pub mod toast;
