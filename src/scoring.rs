use crate::catalog::CAUTIONARY_POEMS;
use crate::models::{
    Factors, MAX_DURATION_MONTHS, MAX_EMOTIONAL_IMPACT, RecoveryInput, RecoveryResult,
};
use crate::mood::Mood;
use chrono::{Local, NaiveDateTime, NaiveTime};
use rand::Rng;

const SECONDS_PER_DAY: i64 = 86_400;

const TIME_CAP: f64 = 40.0;
const EMOTIONAL_CAP: f64 = 30.0;
const ACTIVITY_CAP: f64 = 20.0;
const POINTS_PER_ACTIVITY: f64 = 5.0;
const DURATION_CAP: f64 = 10.0;
const PENALTY_RATE: f64 = 0.3;
const PENALTY_CAP: f64 = 20.0;

pub fn calculate<R: Rng + ?Sized>(input: &RecoveryInput, rng: &mut R) -> RecoveryResult {
    calculate_at(Local::now().naive_local(), input, rng)
}

/// Scores `input` as of `now`. Out-of-range impact and duration are clamped
/// to their form bounds first; a breakup date in the future is left alone and
/// only the final percentage clamp applies.
pub fn calculate_at<R: Rng + ?Sized>(
    now: NaiveDateTime,
    input: &RecoveryInput,
    rng: &mut R,
) -> RecoveryResult {
    let (percentage, factors) = score_at(now, input);
    let cautionary_text = input
        .has_negative_activity()
        .then(|| CAUTIONARY_POEMS[rng.gen_range(0..CAUTIONARY_POEMS.len())]);
    let mood = Mood::from_percentage(percentage);

    RecoveryResult {
        percentage,
        mood,
        mood_emoji: mood.emoji(),
        mood_message: mood.message(),
        advice: mood.advice(&input.activities),
        palette: mood.palette(),
        cautionary_text,
        factors,
    }
}

/// Percentage alone, without drawing a cautionary poem.
pub fn percentage_at(now: NaiveDateTime, input: &RecoveryInput) -> f64 {
    score_at(now, input).0
}

fn score_at(now: NaiveDateTime, input: &RecoveryInput) -> (f64, Factors) {
    let days = days_since(now, input);
    let time = time_factor(days);
    let emotional = emotional_factor(input.emotional_impact);
    let activity = activity_factor(input.positive_activity_count());
    let duration = duration_factor(input.relationship_duration_months);
    let raw_total = time + emotional + activity + duration;

    let (total, penalty) = if input.has_negative_activity() {
        let penalty = (raw_total * PENALTY_RATE).min(PENALTY_CAP);
        ((raw_total - penalty).max(0.0), penalty)
    } else {
        (raw_total, 0.0)
    };

    let factors = Factors {
        days_since_breakup: days,
        time,
        emotional,
        activity,
        duration,
        raw_total,
        penalty,
    };
    (total.clamp(0.0, 100.0), factors)
}

fn days_since(now: NaiveDateTime, input: &RecoveryInput) -> i64 {
    let start = input.breakup_date.and_time(NaiveTime::MIN);
    (now - start).num_seconds().div_euclid(SECONDS_PER_DAY)
}

fn time_factor(days: i64) -> f64 {
    let d = days as f64;
    if d <= 30.0 {
        (d / 30.0) * 20.0
    } else if d <= 180.0 {
        20.0 + ((d - 30.0) / 150.0) * 15.0
    } else {
        35.0 + ((d - 180.0) / 180.0).min(1.0) * (TIME_CAP - 35.0)
    }
}

fn emotional_factor(impact: f64) -> f64 {
    let impact = bounded(impact, MAX_EMOTIONAL_IMPACT);
    EMOTIONAL_CAP * (1.0 - (impact / 100.0).powf(0.7))
}

fn activity_factor(positive: usize) -> f64 {
    (positive as f64 * POINTS_PER_ACTIVITY).min(ACTIVITY_CAP)
}

fn duration_factor(months: f64) -> f64 {
    let m = bounded(months, MAX_DURATION_MONTHS);
    if m <= 3.0 {
        DURATION_CAP
    } else if m <= 12.0 {
        DURATION_CAP - ((m - 3.0) / 9.0) * 5.0
    } else {
        5.0 - ((m - 12.0) / 12.0).min(1.0) * 5.0
    }
}

fn bounded(value: f64, max: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, max) } else { 0.0 }
}
