extern crate anyhow;
extern crate flexi_logger;
extern crate getopts;
#[macro_use]
extern crate log;
extern crate reqwest;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

mod api;
mod config;
mod controller;
mod displays;
mod result;
mod structs;

use std::io::BufRead;

use controller::{FormController, SubmitOutcome};
use structs::{DisplayType, TransitType};

fn print_usage(program: &str, opts: &getopts::Options) {
    let brief = format!("Usage: {} [options]", program);
    print!("{}", opts.usage(&brief));
}

fn print_stops<A: api::StopsApi>(form: &FormController<A>) {
    if form.suggestions().is_empty() {
        println!("(no stops)");
    }
    for stop in form.suggestions() {
        match stop.stop_id {
            Some(ref id) => println!("{}\t{}", id, stop.stop_name),
            None => println!("-\t{}", stop.stop_name),
        }
    }
}

fn print_displays<A: api::StopsApi>(form: &FormController<A>) {
    for display in form.display_options() {
        let checked = if form.selected_display() == Some(*display) { "(*)" } else { "( )" };
        println!("{} {}", checked, display);
    }
}

fn print_form<A: api::StopsApi>(form: &FormController<A>) {
    println!("transit type: {}", form.transit_type().map(|t| t.as_str()).unwrap_or("-"));
    println!("stop:         {}", form.stop_text());
    println!("stop id:      {}", form.stop_id().unwrap_or("-"));
    println!("display:      {}", form.selected_display().map(|d| d.as_str()).unwrap_or("-"));
}

fn select_display_by_name<A: api::StopsApi>(form: &mut FormController<A>, name: &str) -> bool {
    match DisplayType::parse(name) {
        Some(display_type) => return form.select_display(display_type),
        None => {
            warn!("Unknown display type '{}'", name);
            return false;
        }
    }
}

const INTERACTIVE_HELP: &str = "\
commands:
  type <Metropolitan-Train|Tram>   switch transit type and reload stops
  stop <name>                      enter a stop name
  display <platform|tram_display>  pick a display
  stops                            list stop suggestions
  displays                         list display options
  show                             show the current form
  submit                           send the selection to the display
  quit";

fn run_interactive<A: api::StopsApi>(form: &mut FormController<A>) -> result::PtvSelectResult<()> {
    println!("{}", INTERACTIVE_HELP);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        let (command, arg) = match line.find(' ') {
            Some(i) => (&line[..i], line[i + 1..].trim()),
            None => (line, ""),
        };

        match command {
            "" => {},
            "type" => {
                form.change_transit_type(TransitType::parse(arg));
                println!("{} stops, displays: {}",
                         form.suggestions().len(),
                         form.display_options().iter()
                         .map(|d| d.as_str())
                         .collect::<Vec<&str>>()
                         .join(", "));
            },
            "stop" => {
                form.on_stop_input(arg);
                println!("stop id: {}", form.stop_id().unwrap_or("-"));
            },
            "display" => {
                if !select_display_by_name(form, arg) {
                    println!("'{}' is not one of the display options", arg);
                }
            },
            "stops" => print_stops(form),
            "displays" => print_displays(form),
            "show" => print_form(form),
            "submit" => println!("{}", form.submit_selection().alert_text()),
            "help" => println!("{}", INTERACTIVE_HELP),
            "quit" | "exit" => break,
            _ => println!("Unknown command '{}', try 'help'", command),
        }
    }

    return Ok(());
}

fn run_one_shot<A: api::StopsApi>(form: &mut FormController<A>, matches: &getopts::Matches) -> bool {
    if let Some(transit_type) = matches.opt_str("type") {
        form.change_transit_type(TransitType::parse(&transit_type));
    }

    if matches.opt_present("list-stops") {
        print_stops(form);
        print_displays(form);
        return true;
    }

    if let Some(stop) = matches.opt_str("stop") {
        form.on_stop_input(&stop);
    }

    match matches.opt_str("display") {
        Some(display) => {
            select_display_by_name(form, &display);
        },
        // A single option is preselected, like a lone radio button would be.
        None => {
            if form.display_options().len() == 1 {
                let only = form.display_options()[0];
                form.select_display(only);
            }
        },
    }

    let outcome = form.submit_selection();
    println!("{}", outcome.alert_text());
    match outcome {
        SubmitOutcome::Sent(_) => return true,
        _ => return false,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optopt("c", "config", "JSON config file.", "FILENAME");
    opts.optopt("s", "server", "Display server base url.", "URL");
    opts.optopt("t", "type", "Transit type (Metropolitan-Train or Tram).", "TYPE");
    opts.optopt("n", "stop", "Stop name, exactly as listed.", "NAME");
    opts.optopt("d", "display", "Display type (platform or tram_display).", "DISPLAY");
    opts.optflag("l", "list-stops", "List stops and displays for --type and exit.");
    opts.optflag("i", "interactive", "Read commands from stdin.");
    opts.optflag("v", "verbose", "Debug logging.");
    opts.optflag("h", "help", "Print this help.");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(err) => {
            eprintln!("{}", err);
            print_usage(&args[0], &opts);
            std::process::exit(2);
        }
    };

    if matches.opt_present("help") {
        print_usage(&args[0], &opts);
        return;
    }

    let log_spec = if matches.opt_present("verbose") { "debug" } else { "info" };
    let _logger = match flexi_logger::Logger::try_with_env_or_str(log_spec)
        .and_then(|logger| logger.start()) {
            Ok(handle) => handle,
            Err(err) => {
                eprintln!("Logger initialization failed: {}", err);
                std::process::exit(1);
            }
        };

    let mut config = match matches.opt_str("config") {
        Some(path) => match config::config_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        },
        None => config::Config::default(),
    };
    if let Some(server_url) = matches.opt_str("server") {
        config.server_url = server_url;
    }

    info!("Running. server={} require_stop_id={}", config.server_url, config.require_stop_id);

    let api = match api::HttpStopsApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    let mut form = FormController::new(api, config.require_stop_id);

    if matches.opt_present("interactive") {
        if let Err(err) = run_interactive(&mut form) {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        return;
    }

    if !run_one_shot(&mut form, &matches) {
        std::process::exit(1);
    }
}
