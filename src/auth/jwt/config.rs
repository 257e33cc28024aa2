// 30 days
pub static JWT_EXP: i64 = 60 * 60 * 24 * 30;
