mod compare;
pub mod report;

pub use compare::{CityComparison, Warmer};

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Deserialize;

use crate::error::WeatherError;
use crate::weather::WeatherService;

pub const SERVER_NAME: &str = "fencode-weather-server";

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CityParams {
    #[schemars(description = "Nombre de la ciudad (ej: 'Monterrey', 'Ciudad de México', 'Buenos Aires')")]
    pub city: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareParams {
    #[schemars(description = "Primera ciudad a comparar")]
    pub city1: String,
    #[schemars(description = "Segunda ciudad a comparar")]
    pub city2: String,
}

/// Rendered outcome of one tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReply {
    pub text: String,
    pub is_error: bool,
}

impl From<ToolReply> for CallToolResult {
    fn from(reply: ToolReply) -> Self {
        let content = vec![Content::text(reply.text)];
        if reply.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

/// MCP server exposing the weather tools.
///
/// Cheap to clone; every transport session gets its own copy sharing one
/// [`WeatherService`].
#[derive(Clone)]
pub struct WeatherTools {
    weather: Arc<WeatherService>,
    tool_router: ToolRouter<Self>,
}

impl WeatherTools {
    pub fn new(weather: Arc<WeatherService>) -> Self {
        Self {
            weather,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn current_weather(&self, city: &str) -> ToolReply {
        let result = match required("city", city) {
            Ok(city) => self.weather.current_conditions(city).await,
            Err(err) => Err(err),
        };
        reply("get_current_weather", result, report::current_weather)
    }

    pub async fn weekly_forecast(&self, city: &str) -> ToolReply {
        let result = match required("city", city) {
            Ok(city) => self.weather.weekly_forecast(city).await,
            Err(err) => Err(err),
        };
        reply("get_weekly_forecast", result, report::weekly_forecast)
    }

    /// Both lookups run concurrently; the first failure drops the other one
    pub async fn compare_cities(&self, city1: &str, city2: &str) -> ToolReply {
        let result = async {
            let city1 = required("city1", city1)?;
            let city2 = required("city2", city2)?;
            let (first, second) = tokio::try_join!(
                self.weather.current_conditions(city1),
                self.weather.current_conditions(city2),
            )?;
            Ok::<_, WeatherError>(CityComparison::new(first, second))
        }
        .await;
        reply("compare_cities_weather", result, report::city_comparison)
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, WeatherError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(WeatherError::InvalidInput(format!(
            "'{field}' no puede estar vacío"
        )));
    }
    Ok(value)
}

fn reply<T>(
    tool: &str,
    result: Result<T, WeatherError>,
    render: impl FnOnce(&T) -> String,
) -> ToolReply {
    match result {
        Ok(value) => ToolReply {
            text: render(&value),
            is_error: false,
        },
        Err(err) => {
            tracing::warn!(
                tool = %tool,
                error = %err,
                code = err.error_code(),
                "Tool call failed"
            );
            ToolReply {
                text: report::error(&err),
                is_error: true,
            }
        }
    }
}

#[tool_router]
impl WeatherTools {
    #[tool(
        description = "Obtiene el clima actual de cualquier ciudad del mundo: temperatura, sensación térmica, humedad, viento y condición climática."
    )]
    async fn get_current_weather(
        &self,
        Parameters(params): Parameters<CityParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.current_weather(&params.city).await.into())
    }

    #[tool(description = "Obtiene el pronóstico del clima para los próximos 7 días de cualquier ciudad.")]
    async fn get_weekly_forecast(
        &self,
        Parameters(params): Parameters<CityParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.weekly_forecast(&params.city).await.into())
    }

    #[tool(description = "Compara el clima actual entre dos ciudades.")]
    async fn compare_cities_weather(
        &self,
        Parameters(params): Parameters<CompareParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.compare_cities(&params.city1, &params.city2).await.into())
    }
}

#[tool_handler]
impl ServerHandler for WeatherTools {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(
                "Clima de cualquier ciudad del mundo vía Open-Meteo: clima actual \
                 (get_current_weather), pronóstico de 7 días (get_weekly_forecast) y \
                 comparación entre dos ciudades (compare_cities_weather)."
                    .into(),
            ),
            ..Default::default()
        }
    }
}
