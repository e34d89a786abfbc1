/// Метаданные UseCase для идентификации и документирования
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u101")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "sentiment_analysis")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Analyse de Sentiment")
    fn display_name() -> &'static str;

    /// Путь эндпоинта инференса относительно базового URL API
    fn endpoint() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u101_sentiment_analysis"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
