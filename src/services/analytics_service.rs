use crate::entities::{client_entity as clients, redemption_entity as redemptions};
use crate::error::AppResult;
use crate::models::*;
use crate::utils::*;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Timelike, Utc, Weekday};
use sea_orm::sea_query::{Expr, Order};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_DAYS: u32 = 30;
pub const MAX_DAYS: u32 = 365;
pub const DEFAULT_TOP_LIMIT: u32 = 10;
pub const MAX_TOP_LIMIT: u32 = 50;

const WEEKDAY_WINDOW_DAYS: i64 = 90;
const HOURLY_WINDOW_DAYS: i64 = 30;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const PALETTE: [&str; 10] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#C9CBCF", "#2ECC71",
    "#E74C3C", "#34495E",
];

#[derive(Clone)]
pub struct AnalyticsService {
    pool: DatabaseConnection,
    offset: FixedOffset,
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

fn totals<'a>(rows: impl Iterator<Item = &'a redemptions::Model>) -> PeriodTotals {
    let (count, cents) = rows.fold((0u64, 0i64), |(n, c), r| (n + 1, c + r.amount_cents));
    PeriodTotals {
        canjes: count,
        monto: cents_to_amount(cents),
    }
}

/// Counts and amounts per local calendar day, zero-filled, oldest first.
pub fn daily_buckets(
    rows: &[redemptions::Model],
    first_day: NaiveDate,
    days: u32,
    offset: FixedOffset,
) -> ChartData {
    let days = days as usize;
    let mut counts = vec![0.0; days];
    let mut cents = vec![0i64; days];

    for row in rows {
        let index = (local_date(row.created_at, offset) - first_day).num_days();
        if let Ok(index) = usize::try_from(index)
            && index < days
        {
            counts[index] += 1.0;
            cents[index] += row.amount_cents;
        }
    }

    let labels = (0..days)
        .map(|i| (first_day + Duration::days(i as i64)).format("%Y-%m-%d").to_string())
        .collect();

    ChartData {
        labels,
        datasets: vec![
            ChartDataset {
                label: "Canjes".to_string(),
                data: counts,
                background_color: None,
            },
            ChartDataset {
                label: "Monto".to_string(),
                data: cents.into_iter().map(cents_to_amount).collect(),
                background_color: None,
            },
        ],
    }
}

/// All seven weekdays, busiest first. Ties keep Monday-first order.
pub fn weekday_ranking(rows: &[redemptions::Model], offset: FixedOffset) -> Vec<WeekdayStat> {
    let mut buckets = [(0u64, 0i64); 7];
    for row in rows {
        let day = row.created_at.with_timezone(&offset).weekday();
        let bucket = &mut buckets[day.num_days_from_monday() as usize];
        bucket.0 += 1;
        bucket.1 += row.amount_cents;
    }

    let mut ranking: Vec<WeekdayStat> = WEEKDAYS
        .iter()
        .zip(buckets)
        .map(|(&day, (count, cents))| {
            let promedio = if count == 0 {
                0.0
            } else {
                round2(cents_to_amount(cents) / count as f64)
            };
            WeekdayStat {
                dia_semana: weekday_name(day).to_string(),
                total_canjes: count,
                promedio_monto: promedio,
            }
        })
        .collect();

    ranking.sort_by(|a, b| b.total_canjes.cmp(&a.total_canjes));
    ranking
}

/// Redemption counts per local hour of day.
pub fn hourly_pattern(rows: &[redemptions::Model], offset: FixedOffset) -> HourlyPattern {
    let mut canjes = vec![0u64; 24];
    for row in rows {
        canjes[row.created_at.with_timezone(&offset).hour() as usize] += 1;
    }

    HourlyPattern {
        labels: (0..24).map(|h| format!("{h:02}:00")).collect(),
        canjes,
    }
}

impl AnalyticsService {
    pub fn new(pool: DatabaseConnection, offset: FixedOffset) -> Self {
        Self { pool, offset }
    }

    fn scoped(&self, user: &SessionUser) -> Select<redemptions::Entity> {
        match user.owner_scope() {
            Some(owner_id) => {
                redemptions::Entity::find().filter(redemptions::Column::UserId.eq(owner_id))
            }
            None => redemptions::Entity::find(),
        }
    }

    async fn redemptions_since(
        &self,
        user: &SessionUser,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<redemptions::Model>> {
        Ok(self
            .scoped(user)
            .filter(redemptions::Column::CreatedAt.gte(since))
            .all(&self.pool)
            .await?)
    }

    pub async fn kpis(&self, user: &SessionUser, now: DateTime<Utc>) -> AppResult<Kpis> {
        let today = local_date(now, self.offset);
        let today_start = start_of_day(today, self.offset);
        let month_start_at = start_of_day(month_start(today), self.offset);
        let previous_month_at = start_of_day(previous_month_start(today), self.offset);

        let rows = self.redemptions_since(user, previous_month_at).await?;
        let this_month: Vec<&redemptions::Model> =
            rows.iter().filter(|r| r.created_at >= month_start_at).collect();

        let today_totals = totals(rows.iter().filter(|r| r.created_at >= today_start));
        let month_totals = totals(this_month.iter().copied());
        let previous_totals = totals(rows.iter().filter(|r| r.created_at < month_start_at));

        let active_clients: HashSet<i32> = this_month.iter().map(|r| r.client_id).collect();

        let mut per_client: HashMap<i32, (u64, i64)> = HashMap::new();
        for row in &this_month {
            let entry = per_client.entry(row.client_id).or_default();
            entry.0 += 1;
            entry.1 += row.amount_cents;
        }
        let leader = per_client
            .into_iter()
            .max_by(|(a_id, a), (b_id, b)| a.1.cmp(&b.1).then(a.0.cmp(&b.0)).then(b_id.cmp(a_id)));

        let top_client = match leader {
            Some((client_id, (count, cents))) => clients::Entity::find_by_id(client_id)
                .one(&self.pool)
                .await?
                .map(|client| TopClientKpi {
                    nombre: client.full_name,
                    total_canjes: count,
                    total_monto: cents_to_amount(cents),
                }),
            None => None,
        };

        let promedio = if today_totals.canjes == 0 {
            0.0
        } else {
            round2(today_totals.monto / today_totals.canjes as f64)
        };

        Ok(Kpis {
            today: TodayKpis {
                canjes: today_totals.canjes,
                monto: today_totals.monto,
                promedio,
            },
            month: MonthKpis {
                canjes: month_totals.canjes,
                monto: month_totals.monto,
                clientes_activos: active_clients.len() as u64,
                growth_monto: percent_change(previous_totals.monto, month_totals.monto),
            },
            top_client,
        })
    }

    pub async fn daily_sales(
        &self,
        user: &SessionUser,
        days: Option<u32>,
        now: DateTime<Utc>,
    ) -> AppResult<ChartData> {
        let days = days.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS);
        let first_day = local_date(now, self.offset) - Duration::days(i64::from(days) - 1);

        let rows = self
            .redemptions_since(user, start_of_day(first_day, self.offset))
            .await?;
        Ok(daily_buckets(&rows, first_day, days, self.offset))
    }

    /// Clients ranked by total redeemed amount.
    pub async fn top_clients(
        &self,
        user: &SessionUser,
        limit: Option<u32>,
    ) -> AppResult<(ChartData, Vec<TopClientEntry>)> {
        let limit = limit.unwrap_or(DEFAULT_TOP_LIMIT).clamp(1, MAX_TOP_LIMIT);

        let ranked: Vec<(i32, i64, i64)> = self
            .scoped(user)
            .select_only()
            .column(redemptions::Column::ClientId)
            .column_as(Expr::col(redemptions::Column::Id).count(), "total_canjes")
            .column_as(
                Expr::cust("CAST(SUM(amount_cents) AS SIGNED)"),
                "total_cents",
            )
            .group_by(redemptions::Column::ClientId)
            .order_by(Expr::cust("total_cents"), Order::Desc)
            .order_by_asc(redemptions::Column::ClientId)
            .limit(u64::from(limit))
            .into_tuple()
            .all(&self.pool)
            .await?;

        let ids: Vec<i32> = ranked.iter().map(|(id, _, _)| *id).collect();
        let names: HashMap<i32, clients::Model> = clients::Entity::find()
            .filter(clients::Column::Id.is_in(ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let entries: Vec<TopClientEntry> = ranked
            .into_iter()
            .filter_map(|(client_id, count, cents)| {
                names.get(&client_id).map(|client| TopClientEntry {
                    cliente_id: client_id,
                    nombre: client.full_name.clone(),
                    cedula: client.national_id.clone(),
                    total_canjes: count.max(0) as u64,
                    total_monto: cents_to_amount(cents),
                })
            })
            .collect();

        let chart = ChartData {
            labels: entries.iter().map(|e| e.nombre.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Monto total".to_string(),
                data: entries.iter().map(|e| e.total_monto).collect(),
                background_color: Some(
                    (0..entries.len())
                        .map(|i| PALETTE[i % PALETTE.len()].to_string())
                        .collect(),
                ),
            }],
        };

        Ok((chart, entries))
    }

    pub async fn trends(&self, user: &SessionUser, now: DateTime<Utc>) -> AppResult<Trends> {
        let this_week = week_start(local_date(now, self.offset));
        let this_week_at = start_of_day(this_week, self.offset);
        let previous_week_at = start_of_day(this_week - Duration::days(7), self.offset);
        let weekday_since = now - Duration::days(WEEKDAY_WINDOW_DAYS);
        let hourly_since = now - Duration::days(HOURLY_WINDOW_DAYS);

        let rows = self
            .redemptions_since(user, previous_week_at.min(weekday_since))
            .await?;

        let current_week = totals(rows.iter().filter(|r| r.created_at >= this_week_at));
        let previous_week = totals(
            rows.iter()
                .filter(|r| r.created_at >= previous_week_at && r.created_at < this_week_at),
        );
        let changes = PercentChanges {
            canjes_percent: percent_change(
                previous_week.canjes as f64,
                current_week.canjes as f64,
            ),
            monto_percent: percent_change(previous_week.monto, current_week.monto),
        };

        let recent: Vec<redemptions::Model> = rows
            .iter()
            .filter(|r| r.created_at >= weekday_since)
            .cloned()
            .collect();
        let last_month: Vec<redemptions::Model> = recent
            .iter()
            .filter(|r| r.created_at >= hourly_since)
            .cloned()
            .collect();

        Ok(Trends {
            weekly_comparison: WeeklyComparison {
                current_week,
                previous_week,
                changes,
            },
            weekday_ranking: weekday_ranking(&recent, self.offset),
            hourly_pattern: hourly_pattern(&last_month, self.offset),
        })
    }
}
