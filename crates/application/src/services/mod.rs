mod answer_translator;
mod route_table;

pub use answer_translator::{strip_quotes, AnswerTranslator};
pub use route_table::{route_for, ResolutionRoute};
