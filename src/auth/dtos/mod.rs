pub mod google_login_dto;
