// Test modules for the prompt-proxy crate
//
// Each source file has a corresponding test file focused on its behavior.
// Provider adapter tests live next to each adapter under `providers/*/tests`.

// Shared fixtures
pub mod helpers;
