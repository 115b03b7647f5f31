//! Build script for tilt-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates timer.toml and generates the `TIMER_CONFIG` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Face names accepted in `[[face]]` entries, with their `Face` variant
const FACE_NAMES: &[(&str, &str)] = &[("-Y", "NegY"), ("+X", "PosX"), ("+Y", "PosY"), ("-X", "NegX")];

/// Screen rotations by quarter-turn index
const ORIENTATIONS: &[&str] = &["Rot0", "Rot90", "Rot180", "Rot270"];

fn main() {
    setup_linker();

    let config = load_config();
    let timer = validate_config(&config);
    generate_config(&timer);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse timer.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=timer.toml");

    let config_path = Path::new("timer.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: timer.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a timer.toml configuration file.          ║\n\
            ║  Please create one in the tilt-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read timer.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in timer.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build with a list of problems
fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// One validated `[[face]]` entry
struct Binding {
    variant: &'static str,
    duration_s: u16,
    label: char,
    orientation: &'static str,
}

/// Validated timer.toml contents
struct Timer {
    poll_interval_ms: u32,
    debounce_ms: u32,
    blink_period_ms: u32,
    gravity_min: f32,
    gravity_max: f32,
    bindings: Vec<Binding>,
    melody: Vec<(u16, u16)>,
}

/// Validate timer.toml, collecting every problem before failing
fn validate_config(config: &toml::Value) -> Timer {
    let mut errors = Vec::new();

    let poll_interval_ms = positive_ms(config, "poll_interval_ms", &mut errors);
    let debounce_ms = positive_ms(config, "debounce_ms", &mut errors);
    let blink_period_ms = positive_ms(config, "blink_period_ms", &mut errors);
    let (gravity_min, gravity_max) = validate_gravity(config, &mut errors);
    let bindings = validate_faces(config, &mut errors);
    let melody = validate_melody(config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid timer.toml", &errors);
    }

    println!("cargo:warning=timer.toml validated successfully");

    Timer {
        poll_interval_ms,
        debounce_ms,
        blink_period_ms,
        gravity_min,
        gravity_max,
        bindings,
        melody,
    }
}

fn positive_ms(config: &toml::Value, key: &str, errors: &mut Vec<String>) -> u32 {
    match config.get(key) {
        Some(toml::Value::Integer(v)) if *v > 0 && *v <= u32::MAX as i64 => *v as u32,
        Some(_) => {
            errors.push(format!("'{}' must be a positive integer", key));
            0
        }
        None => {
            errors.push(format!("missing '{}'", key));
            0
        }
    }
}

fn number(value: Option<&toml::Value>) -> Option<f64> {
    match value {
        Some(toml::Value::Float(f)) => Some(*f),
        Some(toml::Value::Integer(i)) => Some(*i as f64),
        _ => None,
    }
}

fn validate_gravity(config: &toml::Value, errors: &mut Vec<String>) -> (f32, f32) {
    let Some(gravity) = config.get("gravity").and_then(|g| g.as_table()) else {
        errors.push("missing [gravity] section".to_string());
        return (0.0, 0.0);
    };

    let min = number(gravity.get("min"));
    let max = number(gravity.get("max"));
    match (min, max) {
        (Some(min), Some(max)) if min > 0.0 && min < max => (min as f32, max as f32),
        (Some(_), Some(_)) => {
            errors.push("[gravity] needs 0 < min < max".to_string());
            (0.0, 0.0)
        }
        _ => {
            errors.push("[gravity] needs numeric 'min' and 'max'".to_string());
            (0.0, 0.0)
        }
    }
}

fn validate_faces(config: &toml::Value, errors: &mut Vec<String>) -> Vec<Binding> {
    let Some(faces) = config.get("face").and_then(|f| f.as_array()) else {
        errors.push("missing [[face]] entries".to_string());
        return Vec::new();
    };

    if faces.len() != FACE_NAMES.len() {
        errors.push(format!(
            "exactly {} [[face]] entries required, found {}",
            FACE_NAMES.len(),
            faces.len()
        ));
    }

    let mut bindings: Vec<Binding> = Vec::new();
    for (i, entry) in faces.iter().enumerate() {
        let Some(entry) = entry.as_table() else {
            errors.push(format!("[[face]] #{} must be a table", i + 1));
            continue;
        };

        let variant = match entry.get("face").and_then(|f| f.as_str()) {
            Some(name) => match FACE_NAMES.iter().find(|(n, _)| *n == name) {
                Some((_, variant)) => *variant,
                None => {
                    errors.push(format!("[[face]] #{} unknown face '{}'", i + 1, name));
                    continue;
                }
            },
            None => {
                errors.push(format!("[[face]] #{} missing 'face'", i + 1));
                continue;
            }
        };

        if bindings.iter().any(|b| b.variant == variant) {
            errors.push(format!("[[face]] #{} repeats a face", i + 1));
        }

        let duration_s = match entry.get("duration_s") {
            Some(toml::Value::Integer(d)) if *d > 0 && *d <= u16::MAX as i64 => *d as u16,
            _ => {
                errors.push(format!("[[face]] #{} duration_s must be 1-65535", i + 1));
                0
            }
        };

        let label = match entry.get("label").and_then(|l| l.as_str()) {
            Some(l) if l.chars().count() == 1 => l.chars().next().unwrap_or(' '),
            _ => {
                errors.push(format!("[[face]] #{} label must be one character", i + 1));
                ' '
            }
        };

        let orientation = match entry.get("orientation") {
            Some(toml::Value::Integer(o)) if (0..ORIENTATIONS.len() as i64).contains(o) => {
                ORIENTATIONS[*o as usize]
            }
            _ => {
                errors.push(format!("[[face]] #{} orientation must be 0-3", i + 1));
                ORIENTATIONS[0]
            }
        };

        bindings.push(Binding {
            variant,
            duration_s,
            label,
            orientation,
        });
    }

    bindings
}

fn validate_melody(config: &toml::Value, errors: &mut Vec<String>) -> Vec<(u16, u16)> {
    let Some(notes) = config
        .get("melody")
        .and_then(|m| m.get("notes"))
        .and_then(|n| n.as_array())
    else {
        errors.push("missing [melody] notes".to_string());
        return Vec::new();
    };

    if notes.is_empty() {
        errors.push("[melody] notes cannot be empty".to_string());
    }

    let mut melody = Vec::new();
    for (i, note) in notes.iter().enumerate() {
        let pair = note.as_array().map(|p| p.as_slice());
        match pair {
            Some([toml::Value::Integer(f), toml::Value::Integer(d)])
                if (0..=u16::MAX as i64).contains(f) && (1..=u16::MAX as i64).contains(d) =>
            {
                melody.push((*f as u16, *d as u16));
            }
            _ => errors.push(format!(
                "[melody] note #{} must be [frequency_hz, duration_ms]",
                i + 1
            )),
        }
    }

    melody
}

/// Write the validated config as Rust constants into OUT_DIR
fn generate_config(timer: &Timer) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let bindings = timer
        .bindings
        .iter()
        .map(|b| {
            format!(
                "    tilt_core::config::FaceBinding {{\n        \
                 face: tilt_core::orientation::Face::{},\n        \
                 duration_s: {},\n        \
                 label: {:?},\n        \
                 orientation: tilt_core::config::DisplayOrientation::{},\n    }},\n",
                b.variant, b.duration_s, b.label, b.orientation
            )
        })
        .collect::<String>();

    let notes = timer
        .melody
        .iter()
        .map(|(f, d)| format!("    tilt_core::alarm::Note::new({}, {}),\n", f, d))
        .collect::<String>();

    let source = format!(
        "// Generated by build.rs from timer.toml\n\n\
         /// Motion sampling period (ms)\n\
         pub const POLL_INTERVAL_MS: u32 = {poll};\n\n\
         const MELODY: [tilt_core::alarm::Note; {note_count}] = [\n{notes}];\n\n\
         /// Timer configuration from timer.toml\n\
         pub const TIMER_CONFIG: tilt_core::config::TimerConfig = tilt_core::config::TimerConfig {{\n\
         bindings: [\n{bindings}],\n\
         gravity: tilt_core::orientation::GravityBand {{ min: {min:?}, max: {max:?} }},\n\
         debounce_ms: {debounce},\n\
         blink_period_ms: {blink},\n\
         melody: &MELODY,\n\
         }};\n",
        poll = timer.poll_interval_ms,
        note_count = timer.melody.len(),
        notes = notes,
        bindings = bindings,
        min = timer.gravity_min,
        max = timer.gravity_max,
        debounce = timer.debounce_ms,
        blink = timer.blink_period_ms,
    );

    fs::write(out_dir.join("timer_config.rs"), source).unwrap();
}
