pub mod current_date_tool;
pub mod day_of_week_tool;
pub mod monday_of_week_tool;
mod registry;
mod tool;
pub mod week_info_tool;

pub use registry::ToolRegistry;
pub use tool::{LlmTool, ToolDescriptor};
