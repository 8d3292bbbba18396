use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DailySalesQuery {
    /// Number of days to include, today included (default 30)
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TopClientsQuery {
    /// Number of clients to return (default 10)
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PeriodTotals {
    pub canjes: u64,
    pub monto: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodayKpis {
    pub canjes: u64,
    pub monto: f64,
    pub promedio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthKpis {
    pub canjes: u64,
    pub monto: f64,
    pub clientes_activos: u64,
    /// Percent change of the amount against the previous month
    pub growth_monto: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopClientKpi {
    pub nombre: String,
    pub total_canjes: u64,
    pub total_monto: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Kpis {
    pub today: TodayKpis,
    pub month: MonthKpis,
    pub top_client: Option<TopClientKpi>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct KpisResponse {
    pub success: bool,
    pub kpis: Kpis,
}

/// One series of a Chart.js dataset list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChartResponse {
    pub success: bool,
    pub data: ChartData,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopClientEntry {
    pub cliente_id: i32,
    pub nombre: String,
    pub cedula: String,
    pub total_canjes: u64,
    pub total_monto: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopClientsResponse {
    pub success: bool,
    pub data: ChartData,
    pub clients: Vec<TopClientEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PercentChanges {
    pub canjes_percent: f64,
    pub monto_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeeklyComparison {
    pub current_week: PeriodTotals,
    pub previous_week: PeriodTotals,
    pub changes: PercentChanges,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeekdayStat {
    pub dia_semana: String,
    pub total_canjes: u64,
    pub promedio_monto: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HourlyPattern {
    pub labels: Vec<String>,
    pub canjes: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Trends {
    pub weekly_comparison: WeeklyComparison,
    pub weekday_ranking: Vec<WeekdayStat>,
    pub hourly_pattern: HourlyPattern,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TrendsResponse {
    pub success: bool,
    pub trends: Trends,
}
