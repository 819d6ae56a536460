//! Reusable UI pieces shared by the page sections: icons and social links,
//! the floating language switch and the error page.

pub mod error_template;
pub mod icons;
pub mod lang_switch;
