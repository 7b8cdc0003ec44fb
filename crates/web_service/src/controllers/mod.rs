pub mod mcp_controller;
