use miette::Result;

/// Main entry point for the graphviz-dot CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    // Run the library's main function
    graphviz_dot::run()
}
