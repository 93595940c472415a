use crate::max_flow::{AugmentingPathSearch, FlowNetwork, FlowState, MaxFlow};
use crate::simple_type_name;
use cancel_this::Cancelled;
use computation_process::Incomplete::Suspended;
use computation_process::{Completable, ComputationStep};
use log::{debug, info};
use std::marker::PhantomData;

/// A helper implementation of [`ComputationStep`] that repeatedly asks an
/// [`AugmentingPathSearch`] for a path in the residual graph and pushes the bottleneck
/// amount of flow along it. Each call to `step` performs at most one augmentation.
pub struct IterativeAugmentation<S: AugmentingPathSearch>(PhantomData<S>);

impl<S: AugmentingPathSearch> ComputationStep<FlowNetwork, FlowState, MaxFlow>
    for IterativeAugmentation<S>
{
    fn step(context: &FlowNetwork, state: &mut FlowState) -> Completable<MaxFlow> {
        if !state.fits(context) {
            debug!(
                "Augmentation<{}> got a flow state that does not match a network with {} nodes.",
                simple_type_name::<S>(),
                context.node_count()
            );
            return Err(Cancelled::new("FlowState::flow").into());
        }

        let Some(path) = S::find(context, state)? else {
            info!(
                "[iteration:{}] Augmentation<{}> finished with max flow {}.",
                state.iteration,
                simple_type_name::<S>(),
                state.value
            );

            return Ok(MaxFlow::from(&*state));
        };

        if state.iteration >= context.max_iterations {
            debug!(
                "[iteration:{}] Augmentation<{}> canceled (exceeded iteration count).",
                state.iteration,
                simple_type_name::<S>()
            );

            return Err(Cancelled::new("FlowNetwork::max_iterations").into());
        } else {
            state.iteration += 1;
        }

        let bottleneck = path
            .windows(2)
            .map(|edge| state.residual(context, edge[0], edge[1]))
            .min()
            .unwrap_or(0);

        for edge in path.windows(2) {
            state.push(edge[0], edge[1], bottleneck);
        }
        state.value += bottleneck;

        debug!(
            "[iteration:{}] Augmentation<{}> pushed {} along {:?}; total flow {}.",
            state.iteration,
            simple_type_name::<S>(),
            bottleneck,
            path,
            state.value
        );

        Err(Suspended)
    }
}
