pub mod month_query_dto;
