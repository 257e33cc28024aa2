pub mod upsert_budget_dto;
