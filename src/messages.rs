//! User-facing text. The display language is fixed to Finnish.

pub const ASK_CITY: &str = "Syötä kaupunki, jonka sääennusteen haluat: ";
pub const ASK_CITY_AGAIN: &str = "Et syöttänyt mitään. Syötä kaupungin nimi: ";
pub const NO_MATCHES: &str = "Antamallesi nimelle ei löytynyt yhtään vastinetta.";
pub const MATCHES_HEADER: &str = "Antamallasi nimellä löytyivät seuraavat tulokset";
pub const ASK_INDEX: &str = "Syötä tarkoittamasi kaupungin numero: ";
pub const NOT_A_NUMBER: &str = "Et syöttänyt numeroa!";
pub const RATE_LIMITED: &str = "Tällä API-avaimella on tehty liikaa hakuja minuutin aikana.";
pub const RATE_LIMITED_HINT: &str = "Odota hetki ja kokeile sitten uudestaan.";
pub const ASK_ANOTHER: &str = "Syötä jonkin toisen kaupungin nimi tehdäksesi uusi haku,";
pub const ASK_ANOTHER_HINT: &str = "tai jätä kenttä tyhjäksi ja paina ENTER poistuaksesi ohjelmasta.";
pub const FATAL_ERROR: &str = "Ohjelmassa tapahtui odottamaton virhe ja se lakkasi toimimasta!";
pub const FATAL_ERROR_DETAIL: &str = "Virheviesti:";

pub fn index_out_of_range(count: usize) -> String {
    format!("Antamasi numeron täytyy olla välillä 1\u{2013}{}!", count)
}

pub fn forecast_header(name: &str) -> String {
    format!("Paikkakunnan {} viikon sääennuste on:", name)
}
