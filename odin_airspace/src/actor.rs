/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */


//! the driving loop of the engine. An `AirspaceActor` owns the only `AirspaceState`, processes its messages
//! sequentially (which means there is at most one fetch in flight) and publishes each new state through a
//! watch channel. Clients interact with it through a cloneable `AirspaceHandle`

use std::{collections::VecDeque, sync::Arc};
use async_trait::async_trait;
use serde::Serialize;
use strum::{Display,AsRefStr};
use tokio::{sync::{mpsc,oneshot,watch}, task::JoinHandle, time::{interval,timeout,MissedTickBehavior}};
use odin_common::datetime::EpochMillis;
use tracing::{debug,info,warn};

use crate::{AirspaceConfig, ReferenceTables, feed::StateFeed, pipeline::{process,AirspaceSnapshot}};
use crate::errors::{Result,op_failed};

const MSG_QUEUE_LEN: usize = 32;

/* #region state *********************************************************************************************/

#[derive(Serialize,Debug,Clone,Copy,PartialEq,Eq,Display,AsRefStr)]
pub enum AirspaceStatus {
    NoData, // we never got a snapshot
    Live,   // last refresh succeeded
    Stale   // last refresh failed, snapshot is from an earlier refresh
}

/// the published state of the airspace monitor. Values are immutable, each refresh creates a new one
#[derive(Serialize,Debug,Clone)]
pub struct AirspaceState {
    pub snapshot: Option<Arc<AirspaceSnapshot>>,
    pub status: AirspaceStatus,
    pub last_error: Option<String>,
    pub last_attempt: Option<EpochMillis>,
    pub last_success: Option<EpochMillis>,
    pub n_refreshes: u64,
    pub n_failures: u64,
}

impl Default for AirspaceState {
    fn default()->Self {
        AirspaceState {
            snapshot: None,
            status: AirspaceStatus::NoData,
            last_error: None,
            last_attempt: None,
            last_success: None,
            n_refreshes: 0,
            n_failures: 0
        }
    }
}

impl AirspaceState {
    pub fn with_snapshot (&self, snapshot: Arc<AirspaceSnapshot>, now: EpochMillis)->Self {
        AirspaceState {
            snapshot: Some(snapshot),
            status: AirspaceStatus::Live,
            last_error: None,
            last_attempt: Some(now),
            last_success: Some(now),
            n_refreshes: self.n_refreshes + 1,
            n_failures: self.n_failures
        }
    }

    /// keeps the previous snapshot (if any)
    pub fn with_failure (&self, error: String, now: EpochMillis)->Self {
        let status = if self.snapshot.is_some() { AirspaceStatus::Stale } else { AirspaceStatus::NoData };

        AirspaceState {
            snapshot: self.snapshot.clone(),
            status,
            last_error: Some(error),
            last_attempt: Some(now),
            last_success: self.last_success,
            n_refreshes: self.n_refreshes + 1,
            n_failures: self.n_failures + 1
        }
    }

    pub fn is_live (&self)->bool { self.status == AirspaceStatus::Live }
}

/// what a refresh request gets back
#[derive(Debug,Clone,PartialEq)]
pub enum RefreshOutcome {
    Updated { n_aircraft: usize, n_dropped: usize },
    Failed(String)
}

impl RefreshOutcome {
    pub fn is_updated (&self)->bool { matches!( self, RefreshOutcome::Updated{..}) }
}

/* #endregion state */

/// the action that gets executed after each state change
#[async_trait]
pub trait AirspaceAction: Send + Sync + 'static {
    async fn execute (&self, state: &AirspaceState);
}

#[async_trait]
impl <F> AirspaceAction for F where F: Fn(&AirspaceState) + Send + Sync + 'static {
    async fn execute (&self, state: &AirspaceState) { self(state) }
}

pub fn no_action ()->impl AirspaceAction { |_: &AirspaceState| {} }

#[derive(Debug)]
enum AirspaceMsg {
    Refresh( oneshot::Sender<RefreshOutcome>),
    Terminate
}

enum Step {
    Tick,
    Msg(AirspaceMsg),
    Closed
}

pub struct AirspaceActor <F,A> where F: StateFeed + 'static, A: AirspaceAction {
    config: Arc<AirspaceConfig>,
    tables: Arc<ReferenceTables>,
    feed: F,
    update_action: A,

    state: Arc<AirspaceState>,
    state_tx: watch::Sender<Arc<AirspaceState>>,
    rx: mpsc::Receiver<AirspaceMsg>,
    deferred: VecDeque<AirspaceMsg>, // non-refresh msgs we received while coalescing
}

impl <F,A> AirspaceActor<F,A> where F: StateFeed + 'static, A: AirspaceAction {

    async fn run (mut self) {
        info!("airspace actor for {} started using {} feed", self.config.region, self.feed.name());

        let mut timer = interval( self.config.update_interval); // first tick fires immediately
        timer.set_missed_tick_behavior( MissedTickBehavior::Delay);

        loop {
            let step = match self.deferred.pop_front() {
                Some(msg) => Step::Msg(msg),
                None => tokio::select! {
                    _ = timer.tick() => Step::Tick,
                    msg = self.rx.recv() => msg.map_or( Step::Closed, Step::Msg)
                }
            };

            match step {
                Step::Tick => { self.refresh( Vec::new()).await; }
                Step::Msg( AirspaceMsg::Refresh(reply)) => {
                    self.refresh( vec![reply]).await;
                    timer.reset(); // no need for a periodic refresh right after a manual one
                }
                Step::Msg( AirspaceMsg::Terminate) | Step::Closed => break
            }
        }

        info!("airspace actor for {} terminated", self.config.region);
    }

    /// fetch and process one snapshot. Refresh requests that queued up while we were busy get the same outcome
    async fn refresh (&mut self, mut replies: Vec<oneshot::Sender<RefreshOutcome>>) {
        let outcome = self.update().await;

        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                AirspaceMsg::Refresh(reply) => replies.push(reply),
                other => self.deferred.push_back(other)
            }
        }
        if replies.len() > 1 { debug!("coalesced {} refresh requests", replies.len()) }

        for reply in replies {
            let _ = reply.send( outcome.clone()); // requester might have given up
        }
    }

    async fn update (&mut self)->RefreshOutcome {
        let now = EpochMillis::now();
        let fetch_timeout = self.config.fetch_timeout;

        let (new_state, outcome) = match timeout( fetch_timeout, self.feed.fetch( &self.config.bbox)).await {
            Ok(Ok(feed_snapshot)) => {
                let snapshot = process( feed_snapshot, &self.tables, &self.config.engine);
                let outcome = RefreshOutcome::Updated { n_aircraft: snapshot.aircraft.len(), n_dropped: snapshot.n_dropped };
                info!("airspace refresh: {} aircraft, {} advisories", snapshot.aircraft.len(), snapshot.advisories.len());
                (self.state.with_snapshot( Arc::new(snapshot), now), outcome)
            }
            Ok(Err(e)) => {
                warn!("airspace refresh failed: {e}");
                let msg = e.to_string();
                (self.state.with_failure( msg.clone(), now), RefreshOutcome::Failed(msg))
            }
            Err(_) => {
                let msg = format!("fetch timed out after {:?}", fetch_timeout);
                warn!("airspace refresh failed: {msg}");
                (self.state.with_failure( msg.clone(), now), RefreshOutcome::Failed(msg))
            }
        };

        self.state = Arc::new( new_state);
        self.state_tx.send_replace( self.state.clone());
        self.update_action.execute( &self.state).await;

        outcome
    }
}

/// the client side of an AirspaceActor
#[derive(Clone)]
pub struct AirspaceHandle {
    tx: mpsc::Sender<AirspaceMsg>,
    state_rx: watch::Receiver<Arc<AirspaceState>>
}

impl AirspaceHandle {
    /// request a refresh and wait for its outcome. If a fetch is already in flight we get its outcome
    pub async fn refresh (&self)->Result<RefreshOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx.send( AirspaceMsg::Refresh(reply_tx)).await.map_err( |_| op_failed!("airspace actor not running"))?;
        reply_rx.await.map_err( |_| op_failed!("airspace actor terminated before refresh completed"))
    }

    /// the current state
    pub fn state (&self)->Arc<AirspaceState> {
        self.state_rx.borrow().clone()
    }

    /// a receiver that gets notified on each state change
    pub fn subscribe (&self)->watch::Receiver<Arc<AirspaceState>> {
        self.state_rx.clone()
    }

    pub async fn terminate (&self)->Result<()> {
        self.tx.send( AirspaceMsg::Terminate).await.map_err( |_| op_failed!("airspace actor not running"))
    }
}

/// validate the static config, then spawn the actor task. This has to be called from within a tokio runtime
pub fn spawn_airspace_actor<F,A> (config: AirspaceConfig, feed: F, update_action: A)->Result<(AirspaceHandle,JoinHandle<()>)>
    where F: StateFeed + 'static, A: AirspaceAction
{
    let tables = Arc::new( config.reference_tables()?);
    let config = Arc::new( config);

    let state = Arc::new( AirspaceState::default());
    let (state_tx, state_rx) = watch::channel( state.clone());
    let (tx, rx) = mpsc::channel( MSG_QUEUE_LEN);

    let actor = AirspaceActor { config, tables, feed, update_action, state, state_tx, rx, deferred: VecDeque::new() };
    let jh = tokio::spawn( actor.run());

    Ok( (AirspaceHandle{ tx, state_rx }, jh) )
}
