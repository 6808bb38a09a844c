mod dashboard;
mod login_admin;
mod logout_admin;
mod session;

pub use dashboard::{dashboard_handler, LOGIN_PATH};
pub use login_admin::{login_admin_handler, LoginRequestDto, LoginResponse};
pub use logout_admin::{logout_admin_handler, LogoutResponseBody};
pub use session::{get_session_handler, SessionResponse};
pub use login_admin::__path_login_admin_handler;
pub use logout_admin::__path_logout_admin_handler;
pub use session::__path_get_session_handler;
pub use dashboard::__path_dashboard_handler;
