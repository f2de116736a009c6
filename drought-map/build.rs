use std::fs;
use std::path::Path;

fn main() {
    // Stage the drought dataset into `public/data/` so it ships next to the
    // WASM bundle and is fetched at runtime from `data/drought_data.geojson`.
    //
    // The dataset is produced by an external pipeline. When it is missing, a
    // tiny placeholder flagged as sample data is written instead so the app
    // still builds and renders.
    let src = Path::new("../data/drought_data.geojson");
    let dest_dir = Path::new("public/data");
    let dest = dest_dir.join("drought_data.geojson");

    fs::create_dir_all(dest_dir).unwrap();

    if src.exists() {
        let contents = fs::read_to_string(src).unwrap();
        // Warn on a broken export; the browser reports it as a load error
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&contents) {
            println!("cargo:warning=drought_data.geojson is not valid JSON: {}", e);
        }
        fs::write(&dest, contents).unwrap();
    } else {
        println!("cargo:warning=Could not find ../data/drought_data.geojson, staging placeholder sample data");
        let placeholder = serde_json::json!({
            "type": "FeatureCollection",
            "metadata": { "date_range": "Sample period", "is_sample": true },
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [-120.25, 38.75] },
                    "properties": {
                        "z_score": -1.4, "z_score_raw": -1.52,
                        "current_prcp": 1.2, "historical_mean": 3.9, "years_of_data": 45
                    }
                }
            ]
        });
        fs::write(&dest, placeholder.to_string()).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../data/drought_data.geojson");
}
