//! User-facing messages (Vietnamese UI)

pub const LOGIN_SUCCEEDED: &str = "Đăng nhập thành công";
pub const LOGIN_FAILED: &str = "Đăng nhập thất bại";
pub const INVALID_CREDENTIALS: &str = "Email hoặc mật khẩu không chính xác";
pub const EMAIL_TAKEN: &str = "Email đã được sử dụng";
pub const CONNECTION_FAILED: &str = "Lỗi kết nối đến server";
pub const REGISTRATION_FAILED: &str = "Đã xảy ra lỗi khi đăng ký";
pub const GENERIC_FAILURE: &str = "Đã xảy ra lỗi trong quá trình đăng nhập";
pub const SESSION_REQUIRED: &str = "Vui lòng đăng nhập để tiếp tục";
pub const GUEST_NAME: &str = "Người dùng";

// Registration form
pub const FULL_NAME_REQUIRED: &str = "Vui lòng nhập họ và tên";
pub const EMAIL_REQUIRED: &str = "Vui lòng nhập email";
pub const EMAIL_INVALID: &str = "Email không hợp lệ";
pub const PHONE_REQUIRED: &str = "Vui lòng nhập số điện thoại";
pub const PHONE_INVALID: &str = "Số điện thoại không hợp lệ";
pub const PASSWORD_REQUIRED: &str = "Vui lòng nhập mật khẩu";
pub const PASSWORD_TOO_SHORT: &str = "Mật khẩu phải có ít nhất 6 ký tự";
pub const CONFIRMATION_REQUIRED: &str = "Vui lòng xác nhận mật khẩu";
pub const CONFIRMATION_MISMATCH: &str = "Mật khẩu xác nhận không khớp";
