//! Local mirror of the remote user list plus the two form drafts.
//!
//! Every network operation is split in two: `begin_*` marks the operation in
//! flight and hands back what to send, `finish_*` folds the response into the
//! mirror. The caller awaits the request in between. A `begin_*` call for an
//! operation that is still in flight returns nothing, so overlapping
//! submissions are dropped instead of racing each other.
//!
//! Each request is stamped with the [`Epoch`] of the backend it went to.
//! [`UserBoard::retarget`] starts a new epoch, and responses from an older one
//! are dropped so the mirror only ever reflects the current backend.
//!
//! Failures are logged here and returned to the caller unchanged; the mirror
//! is never touched by a failed request.

use std::collections::HashSet;

use yew::AttrValue;

use crate::model::user::{NewUser, User, UserPatch, UserUpdate};
use crate::Result;

/// input fields of the two forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    NewName,
    NewEmail,
    UpdateId,
    UpdateName,
    UpdateEmail,
}

/// Identifies one list fetch. Only the latest ticket may replace the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// The backend a mutation was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epoch(u64);

/// an update whose target id parsed, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate {
    pub epoch: Epoch,
    pub id: i64,
    /// the draft as it was submitted
    pub draft: UserUpdate,
}

impl PendingUpdate {
    pub fn patch(&self) -> UserPatch {
        self.draft.patch()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct InFlight {
    load: bool,
    create: bool,
    update: bool,
    delete: HashSet<i64>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserBoard {
    users: Vec<User>,
    new_user: NewUser,
    update_user: UserUpdate,
    in_flight: InFlight,
    generation: u64,
    epoch: u64,
}

impl UserBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn new_user(&self) -> &NewUser {
        &self.new_user
    }

    pub fn update_user(&self) -> &UserUpdate {
        &self.update_user
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load
    }

    pub fn is_creating(&self) -> bool {
        self.in_flight.create
    }

    pub fn is_updating(&self) -> bool {
        self.in_flight.update
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.in_flight.delete.contains(&id)
    }

    pub fn edit(&mut self, field: DraftField, value: impl Into<AttrValue>) {
        let value = value.into();
        match field {
            DraftField::NewName => self.new_user.name = value,
            DraftField::NewEmail => self.new_user.email = value,
            DraftField::UpdateId => self.update_user.id = value,
            DraftField::UpdateName => self.update_user.name = value,
            DraftField::UpdateEmail => self.update_user.email = value,
        }
    }

    fn is_stale(&self, epoch: Epoch, what: &str) -> bool {
        let stale = epoch.0 != self.epoch;
        if stale {
            log::debug!("drop {} response from previous backend", what);
        }
        stale
    }

    /// Starts a full fetch. Always allowed; a newer fetch supersedes any
    /// response still on its way.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.in_flight.load = true;
        LoadTicket(self.generation)
    }

    /// Points the board at another backend: every request still out belongs
    /// to the old one, so its in-flight mark is cleared and its response will
    /// be dropped. Starts the fetch of the new list.
    pub fn retarget(&mut self) -> LoadTicket {
        self.epoch += 1;
        self.in_flight = InFlight::default();
        self.begin_load()
    }

    /// Server order is reversed so the most recently returned user comes first.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<User>>) -> Result<()> {
        if ticket.0 != self.generation {
            log::debug!("drop stale user list, fetch {} superseded", ticket.0);
            return Ok(());
        }
        self.in_flight.load = false;
        match result {
            Ok(mut users) => {
                users.reverse();
                self.users = users;
                Ok(())
            }
            Err(err) => {
                log::error!("error fetching users: {}", err);
                Err(err)
            }
        }
    }

    pub fn begin_create(&mut self) -> Option<(Epoch, NewUser)> {
        if self.in_flight.create {
            log::debug!("create already in flight");
            return None;
        }
        self.in_flight.create = true;
        Some((Epoch(self.epoch), self.new_user.clone()))
    }

    /// The created record goes to the front. The whole draft is cleared on
    /// success, including anything typed while the request was out.
    pub fn finish_create(&mut self, epoch: Epoch, result: Result<User>) -> Result<()> {
        if self.is_stale(epoch, "create") {
            return Ok(());
        }
        self.in_flight.create = false;
        match result {
            Ok(user) => {
                self.users.insert(0, user);
                self.new_user = NewUser::default();
                Ok(())
            }
            Err(err) => {
                log::error!("error creating user: {}", err);
                Err(err)
            }
        }
    }

    /// Only an integer id is sent; anything else updates nothing and leaves
    /// the draft for the user to fix.
    pub fn begin_update(&mut self) -> Option<PendingUpdate> {
        if self.in_flight.update {
            log::debug!("update already in flight");
            return None;
        }
        let Some(id) = self.update_user.target_id() else {
            log::warn!("skip update, {:?} is not a user id", self.update_user.id);
            return None;
        };
        self.in_flight.update = true;
        Some(PendingUpdate {
            epoch: Epoch(self.epoch),
            id,
            draft: self.update_user.clone(),
        })
    }

    /// The record is rewritten with the submitted values, while the draft is
    /// cleared as a whole, same as create.
    pub fn finish_update(&mut self, pending: PendingUpdate, result: Result<()>) -> Result<()> {
        if self.is_stale(pending.epoch, "update") {
            return Ok(());
        }
        self.in_flight.update = false;
        if let Err(err) = result {
            log::error!("error updating user: {}", err);
            return Err(err);
        }
        self.update_user = UserUpdate::default();
        self.users
            .iter_mut()
            .filter(|user| user.id == pending.id)
            .for_each(|user| {
                user.name = pending.draft.name.clone();
                user.email = pending.draft.email.clone();
            });
        Ok(())
    }

    pub fn begin_delete(&mut self, id: i64) -> Option<Epoch> {
        if !self.in_flight.delete.insert(id) {
            log::debug!("delete of user {} already in flight", id);
            return None;
        }
        Some(Epoch(self.epoch))
    }

    pub fn finish_delete(&mut self, epoch: Epoch, id: i64, result: Result<()>) -> Result<()> {
        if self.is_stale(epoch, "delete") {
            return Ok(());
        }
        self.in_flight.delete.remove(&id);
        match result {
            Ok(()) => {
                self.users.retain(|user| user.id != id);
                Ok(())
            }
            Err(err) => {
                log::error!("error deleting user: {}", err);
                Err(err)
            }
        }
    }
}
