pub mod text_remover;
