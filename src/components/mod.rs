pub mod health_card;
pub mod score_chart;

pub use health_card::HealthCard;
pub use score_chart::ScoreChart;
