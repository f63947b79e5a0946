//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation concerns. Items render as markdown list entries; amounts and
//! conventions render as short inline text.

use std::fmt;

use super::{
    datetime::{DayLabel, LocalDate},
    HoursMinutes,
};
use crate::{
    calendar::Week,
    models::{BudgetItem, Frequency, ReconciledStat, TimeAmount, WeekStart},
};

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per = HoursMinutes::new(self.per_occurrence_seconds() as i64);
        match self.frequency {
            Frequency::Daily => write!(f, "{per} × {} days", self.days())?,
            Frequency::Weekly => write!(f, "{per} per week")?,
        }
        if !self.is_enabled() {
            write!(f, " (off)")?;
        }
        Ok(())
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "- **{}** (#{id})", self.name)?,
            None => write!(f, "- **{}**", self.name)?,
        }
        write!(
            f,
            ": {}",
            HoursMinutes::new(self.weekly_duration as i64)
        )?;
        if self.weekly_occurrences > 0 {
            write!(f, " in {} sessions", self.weekly_occurrences)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ReconciledStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_overrun() { "⚠" } else { "○" };
        writeln!(f, "- {status} **{}**", self.item.name)?;
        writeln!(
            f,
            "  - Used: {} of {} ({}%)",
            HoursMinutes::new(self.used as i64),
            HoursMinutes::new(self.planned as i64),
            self.completion_percent
        )?;
        if self.is_overrun() {
            writeln!(
                f,
                "  - Over by: {}",
                HoursMinutes::new(self.remaining).absolute(true)
            )?;
        } else {
            writeln!(f, "  - Remaining: {}", HoursMinutes::new(self.remaining))?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "  - Notes: {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Week {
    /// `YYYY-MM-DD – YYYY-MM-DD`, first to last day. The alternate form lists
    /// each day on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.end().map_err(|_| fmt::Error)?;
        write!(f, "{} – {}", LocalDate(self.start()), LocalDate(&end))?;
        if f.alternate() {
            writeln!(f, "\n")?;
            for day in self.days() {
                writeln!(f, "- {}", DayLabel(&day))?;
            }
        }
        Ok(())
    }
}
