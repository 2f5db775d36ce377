pub mod command_remover;
pub mod passthrough_remover;
