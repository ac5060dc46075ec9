//! screenplay-demo: ejecuta los escenarios de referencia e informa
//! PASS/FAIL por cada uno. Código de salida 1 si alguno falla.

use screenplay_rust::scenario::Scenario;
use screenplay_rust::scripts::{self, ALL};
use serde_json::to_string_pretty;

fn main() {
    // Cargar variables de entorno desde .env si existe (antes de leer SCREENPLAY_*)
    screenplay_core::config::init_dotenv();

    let mut failures = 0usize;
    for (title, script) in ALL {
        let mut scenario = match Scenario::begin(*title) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("[FAIL] {title}: {e}");
                failures += 1;
                continue;
            }
        };
        match scripts::play(&mut scenario, *script) {
            Ok(()) => println!("[PASS] {title}"),
            Err(e) => {
                failures += 1;
                println!("[FAIL] {e}");
                // Estado de la App al fallar, para diagnóstico
                println!("[FAIL] estado: {}",
                         to_string_pretty(&scenario.app_snapshot()).unwrap_or_default());
            }
        }
    }

    println!("{} escenarios, {} fallidos", ALL.len(), failures);
    if failures > 0 {
        std::process::exit(1);
    }
}
