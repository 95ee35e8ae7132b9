mod resolve_txt;

pub use resolve_txt::ResolveTxtUseCase;
