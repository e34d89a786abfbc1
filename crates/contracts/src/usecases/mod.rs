pub mod common;
pub mod u101_sentiment_analysis;
pub mod u102_question_answering;
pub mod u103_text_generation;
