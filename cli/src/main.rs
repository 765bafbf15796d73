use clap::Parser;
use smartkart::colors::ColorScheme;
use smartkart::display::{display_search_info, display_search_results};
use smartkart::json_output::{create_json_output, print_json_output};
use smartkart::*;
use tracing_subscriber::EnvFilter;

fn main() {
    let search_args = Args::parse();
    init_tracing(search_args.verbose);
    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    let store = match SmartKartApp::new(search_args.layout.clone()).and_then(|app| app.load_store())
    {
        Ok(store) => store,
        Err(error_message) => exit_with_error(&colors, &error_message.to_string()),
    };

    let search_request = match create_search_request(search_args, &store) {
        Ok(request) => request,
        Err(error_message) => exit_with_error(&colors, &error_message),
    };

    let is_json = search_request.search_args.json;
    if search_request.search_args.verbose && !is_json {
        display_search_info(&search_request, &colors);
    }

    let search_result = match execute_search(search_request, &store) {
        Ok(result) => result,
        Err(error) => exit_with_error(&colors, &error.to_string()),
    };

    if is_json {
        print_json_output(&create_json_output(&search_result, &store));
    } else {
        display_search_results(&search_result, &store, &colors);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(colors: &ColorScheme, message: &str) -> ! {
    eprintln!("{}", colors.error(&format!("❌ Error: {}", message)));
    std::process::exit(1);
}
