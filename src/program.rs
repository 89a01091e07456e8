use crate::types::{Day, Exercise, Program, Week};

/// Single source of truth for the program shown in the client portal.
/// The routine view treats it as a read-only fixture.
pub fn assigned_program() -> Program {
    Program {
        name: "Fuerza de base".to_string(),
        phase: "Bloque 1 · Adaptación".to_string(),
        load: "Carga progresiva · RPE 7".to_string(),
        weeks: (1..=4).map(build_week).collect(),
    }
}

// Volume ramps over weeks 1-3, week 4 deloads.
fn week_scheme(week_number: u32) -> (&'static str, &'static str, &'static str) {
    match week_number {
        1 => ("3", "10-12", "60 s"),
        2 => ("4", "8-10", "90 s"),
        3 => ("4", "6-8", "120 s"),
        _ => ("2", "12-15", "60 s"),
    }
}

fn build_week(week_number: u32) -> Week {
    let (sets, reps, rest) = week_scheme(week_number);
    Week {
        week_number,
        days: vec![
            Day {
                day_number: 1,
                focus: "Tren inferior".to_string(),
                exercises: vec![
                    Exercise::new("Sentadilla trasera", sets, reps, rest),
                    Exercise::new("Peso muerto rumano", sets, reps, rest),
                    Exercise::new("Zancadas con mancuernas", sets, reps, rest),
                    Exercise::new("Elevación de talones", sets, "15-20", "45 s"),
                    Exercise::new("Plancha abdominal", "3", "45 s", "30 s"),
                ],
            },
            Day {
                day_number: 2,
                focus: "Tren superior · Empuje".to_string(),
                exercises: vec![
                    Exercise::new("Press de banca", sets, reps, rest),
                    Exercise::new("Press militar", sets, reps, rest),
                    Exercise::new("Fondos en paralelas", sets, "AMRAP", rest),
                    Exercise::new("Elevaciones laterales", "3", "12-15", "45 s"),
                ],
            },
            Day {
                day_number: 3,
                focus: "Tren superior · Tracción".to_string(),
                exercises: vec![
                    Exercise::new("Dominadas asistidas", sets, reps, rest),
                    Exercise::new("Remo con barra", sets, reps, rest),
                    Exercise::new("Jalón al pecho", sets, reps, rest),
                    Exercise::new("Curl de bíceps", "3", "10-12", "45 s"),
                    Exercise::new("Face pull", "3", "15", "45 s"),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weeks_are_ordered_and_unique() {
        let program = assigned_program();
        let numbers: Vec<u32> = program.weeks.iter().map(|w| w.week_number).collect();
        assert!(!numbers.is_empty());
        let mut deduped = numbers.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(numbers, deduped);
    }

    #[test]
    fn day_numbers_unique_within_each_week() {
        for week in assigned_program().weeks {
            let mut numbers: Vec<u32> = week.days.iter().map(|d| d.day_number).collect();
            let count = numbers.len();
            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), count);
        }
    }

    #[test]
    fn every_day_has_exercises() {
        for week in assigned_program().weeks {
            for day in week.days {
                assert!(!day.exercises.is_empty());
            }
        }
    }

    #[test]
    fn program_parses_from_wire_format() {
        let json = r#"{
            "name": "Plan demo",
            "phase": "Bloque 1",
            "load": "RPE 7",
            "weeks": [{
                "weekNumber": 1,
                "days": [{
                    "dayNumber": 1,
                    "focus": "Tren inferior",
                    "exercises": [
                        { "name": "Sentadilla", "sets": "3", "reps": "10", "rest": "60 s" }
                    ]
                }]
            }]
        }"#;
        let program: Program = serde_json::from_str(json).expect("fixture JSON should parse");
        assert_eq!(program.weeks[0].week_number, 1);
        assert_eq!(program.weeks[0].days[0].exercises[0].sets, "3");
    }
}
