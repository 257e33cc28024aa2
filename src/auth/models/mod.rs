pub mod access_info;
pub mod google_user_info;
