use above_you::config::Config;
use above_you::geo::GeoCoordinate;
use above_you::keychain::Keychain;
use above_you::orchestrator::{CELESTIAL, ISS, RequestOrchestrator, WEATHER};
use above_you::{error, fatal, info, log, warn};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = Config::from_env().unwrap_or_else(|e| fatal!("Invalid configuration: {e:?}"));
    let k = Keychain::new(&config).unwrap_or_else(|e| fatal!("Failed to initialize: {e:?}"));

    let session = k.session();
    if session.is_logged_in() {
        info!("Session token restored, identity unknown until next login");
    }

    let Some(at) = config.location.or_else(|| k.location().coordinates()) else {
        warn!("No location known, set ABOVE_YOU_LAT and ABOVE_YOU_LON");
        return;
    };
    report(&k.orchestrator(), at).await;
}

async fn report(orch: &RequestOrchestrator, at: GeoCoordinate) {
    let (lat, lon) = (at.latitude(), at.longitude());
    info!("Looking up at ({lat}, {lon})");
    let (weather, sky, place, iss) = tokio::join!(
        orch.fetch_weather(lat, lon),
        orch.fetch_celestial(lat, lon),
        orch.fetch_location(lat, lon),
        orch.fetch_iss(),
    );
    let notifications = orch.k().notifications();

    if place.is_ok() {
        info!("Location: {}", orch.k().location().current().location);
    }
    match weather {
        Ok(w) => info!(
            "Weather: {:.1}°C ({}), wind {:.1} km/h ({}) from {:.0}°, code {} at {}",
            w.temperature(),
            w.temperature_label(),
            w.windspeed(),
            w.wind_label(),
            w.winddirection(),
            w.weathercode(),
            w.time()
        ),
        Err(_) => error!("Weather: {}", notifications.error(WEATHER).unwrap_or_default()),
    }
    match sky {
        Ok(view) => {
            info!("{} of {} bodies above the horizon", view.visible().len(), view.len());
            for body in view.visible() {
                log!("  {:<10} alt {:>6.2}° az {:>6.2}°", body.name(), body.altitude(), body.azimuth());
            }
        }
        Err(_) => error!("Sky: {}", notifications.error(CELESTIAL).unwrap_or_default()),
    }
    match iss.map(|p| p.coordinate()) {
        Ok(Ok(ground)) => info!(
            "ISS above ({:.2}, {:.2}), {:.0} km away",
            ground.latitude(),
            ground.longitude(),
            at.distance_to(&ground) / 1000.0
        ),
        Ok(Err(e)) => warn!("ISS position unusable: {e}"),
        Err(_) => error!("ISS: {}", notifications.error(ISS).unwrap_or_default()),
    }
}
