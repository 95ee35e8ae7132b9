pub mod dns;

pub use dns::ResolveTxtUseCase;
