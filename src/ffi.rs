use crate::algorithm::almost_shortest::AlmostShortestPath;
use crate::graph::directed::DirectedGraph;
use crate::graph::MutableGraph;
use libc::c_longlong;

/// Returned by `asp_solve` when no almost shortest path exists
pub const ASP_NO_PATH: c_longlong = -1;
/// Returned by `asp_solve` for a null graph, bad vertex or oversized distance
pub const ASP_ERROR: c_longlong = -2;

#[repr(C)]
pub struct FfiGraph {
    graph: DirectedGraph<u64>,
}

#[no_mangle]
pub extern "C" fn asp_graph_new(vertex_count: usize) -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: DirectedGraph::with_capacity(vertex_count),
    }))
}

#[no_mangle]
pub extern "C" fn asp_graph_add_edge(g: *mut FfiGraph, from: usize, to: usize, weight: u64) -> bool {
    if g.is_null() {
        return false;
    }
    unsafe { &mut *g }.graph.add_edge(from, to, weight)
}

#[no_mangle]
pub extern "C" fn asp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Almost shortest distance from `source` to `destination`,
/// `ASP_NO_PATH` when none exists, `ASP_ERROR` on invalid input.
#[no_mangle]
pub extern "C" fn asp_solve(g: *const FfiGraph, source: usize, destination: usize) -> c_longlong {
    if g.is_null() {
        return ASP_ERROR;
    }
    let graph = unsafe { &(*g).graph };
    match AlmostShortestPath::new().distance(graph, source, destination) {
        Ok(Some(distance)) => c_longlong::try_from(distance).unwrap_or(ASP_ERROR),
        Ok(None) => ASP_NO_PATH,
        Err(err) => {
            log::warn!("asp_solve failed: {}", err);
            ASP_ERROR
        }
    }
}
