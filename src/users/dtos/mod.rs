use regex::Regex;

pub mod edit_user_dto;

lazy_static! {
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_.-]{3,24}$").unwrap();
}

lazy_static! {
    pub static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()-]*$").unwrap();
}
