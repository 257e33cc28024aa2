pub mod month_options_dto;
