//! User-facing wording of the dashboard in each supported language.
//!
//! The page follows the language the company description is translated into,
//! so headings, captions, placeholders and the profile error read in the same
//! language as the description. Languages without a catalogue fall back to
//! English.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Locale for a translation target such as `"es"` or `"es-MX"`. `None`
    /// (no translation) and unknown languages give English.
    pub fn for_language(lang: Option<&str>) -> Self {
        let primary = lang
            .map(|l| l.split(['-', '_']).next().unwrap_or(l).trim())
            .unwrap_or_default();
        if primary.eq_ignore_ascii_case("es") {
            Locale::Spanish
        } else {
            Locale::English
        }
    }

    /// ISO 639-1 code, used as the page's `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::English => &ENGLISH,
            Locale::Spanish => &SPANISH,
        }
    }
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Every piece of fixed text shown by the renderers.
#[derive(Debug, Serialize)]
pub struct Strings {
    pub title: &'static str,
    pub form_label: &'static str,
    pub submit: &'static str,
    pub sector_label: &'static str,
    pub chart_heading: &'static str,
    pub chart_label: &'static str,
    pub no_prices: &'static str,
    pub low: &'static str,
    pub high: &'static str,
    pub last: &'static str,
    pub returns_heading: &'static str,
    pub period_column: &'static str,
    pub cagr_column: &'static str,
    pub cagr_caption: &'static str,
    pub volatility_heading: &'static str,
    pub risk_label: &'static str,
    pub volatility_caption: &'static str,
    pub name_placeholder: &'static str,
    pub sector_placeholder: &'static str,
    pub description_placeholder: &'static str,
    pub profile_error: &'static str,
    pub internal_error: &'static str,
    year: &'static str,
    years: &'static str,
}

impl Strings {
    /// Row label of a lookback window: `"1 Year"`, `"3 Years"`.
    pub fn window_label(&self, years: u32) -> String {
        let unit = if years == 1 { self.year } else { self.years };
        format!("{years} {unit}")
    }
}

pub static ENGLISH: Strings = Strings {
    title: "Company Financial Analysis (Yahoo Finance)",
    form_label: "Enter a symbol (e.g. AAPL, TSLA, MSFT)",
    submit: "Analyze",
    sector_label: "Sector",
    chart_heading: "Historical Price (last 5 years)",
    chart_label: "Closing prices",
    no_prices: "No price data available for this period.",
    low: "low",
    high: "high",
    last: "last",
    returns_heading: "Annualized Returns (CAGR)",
    period_column: "Period",
    cagr_column: "CAGR (%)",
    cagr_caption: "Annualized return (CAGR) is computed as \
        ((Final Price / Initial Price) ^ (1 / Years)) - 1",
    volatility_heading: "Annualized Volatility",
    risk_label: "Estimated risk",
    volatility_caption: "Volatility measures the variability of daily returns \
        and is expressed as an annualized standard deviation.",
    name_placeholder: "Name not available",
    sector_placeholder: "Sector not available",
    description_placeholder: "Description not available.",
    profile_error: "Could not retrieve company information. Check the ticker symbol.",
    internal_error: "Internal error while analyzing the ticker.",
    year: "Year",
    years: "Years",
};

pub static SPANISH: Strings = Strings {
    title: "Análisis Financiero de Empresas (Yahoo Finance)",
    form_label: "Ingrese un símbolo (ej. AAPL, TSLA, MSFT)",
    submit: "Analizar",
    sector_label: "Sector",
    chart_heading: "Precio Histórico (últimos 5 años)",
    chart_label: "Precios de cierre",
    no_prices: "No hay datos de precios para este periodo.",
    low: "mín",
    high: "máx",
    last: "último",
    returns_heading: "Rendimientos Anualizados (CAGR)",
    period_column: "Periodo",
    cagr_column: "CAGR (%)",
    cagr_caption: "El rendimiento anualizado (CAGR) se calcula como \
        ((Precio Final / Precio Inicial) ^ (1 / Años)) - 1",
    volatility_heading: "Volatilidad Anualizada",
    risk_label: "Riesgo estimado",
    volatility_caption: "La volatilidad mide la variabilidad de los rendimientos \
        diarios y se expresa como desviación estándar anualizada.",
    name_placeholder: "Nombre no disponible",
    sector_placeholder: "Sector no disponible",
    description_placeholder: "Descripción no disponible.",
    profile_error: "No se pudo obtener información. Verifique el símbolo ingresado.",
    internal_error: "Error interno al analizar el símbolo.",
    year: "Año",
    years: "Años",
};
