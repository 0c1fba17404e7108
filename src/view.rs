//! Calendar views and date navigation.
//!
//! The host owns the current view and anchor date; this module only computes
//! what a navigation request would change them to. Weeks start on Sunday.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Day,
    Week,
    Month,
}

/// Toolbar navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigateAction {
    Prev,
    Next,
    Today,
    Date(NaiveDate),
}

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

impl CalendarView {
    pub const ALL: [CalendarView; 3] = [CalendarView::Day, CalendarView::Week, CalendarView::Month];

    /// First and last visible day (inclusive) for an anchor date.
    ///
    /// Month view shows whole weeks, so its range starts on the Sunday on or
    /// before the 1st and ends on the Saturday on or after the last day.
    pub fn range(self, anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            CalendarView::Day => (anchor, anchor),
            CalendarView::Week => {
                let first = week_start(anchor);
                (first, first + Days::new(6))
            }
            CalendarView::Month => {
                let first_of_month = anchor.with_day(1).unwrap_or(anchor);
                let last_of_month = first_of_month
                    .checked_add_months(Months::new(1))
                    .and_then(|d| d.pred_opt())
                    .unwrap_or(anchor);
                let first = week_start(first_of_month);
                let last = week_start(last_of_month) + Days::new(6);
                (first, last)
            }
        }
    }

    /// Every visible day, in order
    pub fn visible_days(self, anchor: NaiveDate) -> Vec<NaiveDate> {
        let (first, last) = self.range(anchor);
        first.iter_days().take_while(|d| *d <= last).collect()
    }

    /// New anchor date after a navigation request.
    ///
    /// Month steps clamp the day of month (Jan 31 -> Feb 28).
    pub fn navigate(self, anchor: NaiveDate, action: NavigateAction, today: NaiveDate) -> NaiveDate {
        match action {
            NavigateAction::Today => today,
            NavigateAction::Date(date) => date,
            NavigateAction::Next => match self {
                CalendarView::Day => anchor + Days::new(1),
                CalendarView::Week => anchor + Days::new(7),
                CalendarView::Month => anchor.checked_add_months(Months::new(1)).unwrap_or(anchor),
            },
            NavigateAction::Prev => match self {
                CalendarView::Day => anchor - Days::new(1),
                CalendarView::Week => anchor - Days::new(7),
                CalendarView::Month => anchor.checked_sub_months(Months::new(1)).unwrap_or(anchor),
            },
        }
    }

    /// Time-grid views lay out slots; month view only has date cells
    pub fn has_time_grid(self) -> bool {
        !matches!(self, CalendarView::Month)
    }
}

/// View state the host passes in on each render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewControl {
    pub view: CalendarView,
    pub date: NaiveDate,
    pub available_views: Vec<CalendarView>,
}

impl ViewControl {
    pub fn new(view: CalendarView, date: NaiveDate) -> Self {
        Self {
            view,
            date,
            available_views: CalendarView::ALL.to_vec(),
        }
    }

    pub fn with_available_views(mut self, views: &[CalendarView]) -> Self {
        self.available_views = views.to_vec();
        self
    }

    pub fn allows(&self, view: CalendarView) -> bool {
        self.available_views.contains(&view)
    }
}
