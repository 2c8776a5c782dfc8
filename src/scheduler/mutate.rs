use super::{SchedError, Scheduler};
use crate::model::Workload;
use std::mem;

/// Échange les personnes de deux affectations, sans revalider les contraintes,
/// puis recompte entièrement la charge depuis le planning.
pub(super) fn swap(scheduler: &mut Scheduler, first: usize, second: usize) -> Result<(), SchedError> {
    let len = scheduler.session.schedule.len();
    for position in [first, second] {
        if position >= len {
            return Err(SchedError::InvalidPosition { position, len });
        }
    }

    if first != second {
        let records = scheduler.session.schedule.records_mut();
        let a = mem::take(&mut records[first].staff_name);
        let b = mem::replace(&mut records[second].staff_name, a);
        records[first].staff_name = b;
    }

    let session = &mut scheduler.session;
    session.workload = Workload::recount(&session.staff, &session.schedule);

    tracing::info!(first, second, "assignments swapped");
    Ok(())
}
