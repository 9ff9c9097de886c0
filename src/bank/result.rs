/// Shared result type; domain errors are raised as typed `thiserror` enums and
/// recovered with `downcast_ref`
pub type Result<T = ()> = anyhow::Result<T>;
