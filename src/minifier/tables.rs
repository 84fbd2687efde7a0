//! Fixed KerboScript word lists consumed by the pipeline.
//!
//! None of these change at runtime. The reserved set is built once per process.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Grammar keywords.
const KEYWORDS: &[&str] = &[
    "not", "and", "or", "true", "false", "set", "to", "is", "if", "else", "until", "step", "do",
    "lock", "unlock", "print", "at", "on", "toggle", "wait", "when", "then", "off", "stage",
    "clearscreen", "add", "remove", "log", "break", "preserve", "declare", "defined", "local",
    "global", "parameter", "function", "return", "switch", "copy", "from", "rename", "volume",
    "file", "delete", "edit", "run", "runpath", "runoncepath", "once", "compile", "list",
    "reboot", "shutdown", "for", "unset", "choose", "in", "all", "lazyglobal",
];

/// Variables provided by the kOS runtime.
const BOUND_VARIABLES: &[&str] = &[
    "config", "addons", "version", "kuniverse", "warpmode", "warp", "mapview", "activeship",
    "terminal", "archive", "core", "ship", "target", "hastarget", "status", "homeconnection",
    "controlconnection", "missiontime", "sessiontime", "solarprimevector", "donothing",
    "opcodesleft", "heading", "prograde", "retrograde", "facing", "maxthrust",
    "availablethrust", "velocity", "geoposition", "latitude", "longitude", "up", "north",
    "body", "angularmomentum", "angularvel", "angularvelocity", "mass", "verticalspeed",
    "surfacespeed", "groundspeed", "airspeed", "shipname", "vesselname", "altitude", "alt",
    "apoapsis", "periapsis", "sensors", "srfprograde", "srfretrograde", "obt", "orbit",
    "throttle", "steering", "steeringmanager", "wheelsteering", "wheelthrottle", "sasmode",
    "navmode", "sas", "gear", "legs", "chutes", "chutessafe", "lights", "panels", "radiators",
    "ladders", "bays", "deploydrills", "drills", "fuelcells", "isru", "intakes", "brakes",
    "rcs", "abort", "ag1", "ag2", "ag3", "ag4", "ag5", "ag6", "ag7", "ag8", "ag9", "ag10",
    "white", "black", "red", "green", "blue", "yellow", "magenta", "purple", "cyan", "grey",
    "gray", "encounter", "eta", "nextnode", "hasnode", "allnodes",
    // every celestial body is a global as well
    "sun", "kerbol", "moho", "eve", "gilly", "kerbin", "mun", "minmus", "duna", "ike", "dres",
    "jool", "laythe", "vall", "tylo", "bop", "pol", "eeloo",
];

/// Collections accepted by `list <name> in <var>`.
const LISTABLES: &[&str] = &[
    "bodies", "targets", "fonts", "processors", "resources", "parts", "engines", "elements",
    "dockingports", "files", "volumes",
];

/// Built-in functions.
const BUILTIN_FUNCTIONS: &[&str] = &[
    "addalarm", "listalarms", "deletealarm", "buildlist", "vcrs", "vectorcrossproduct", "vdot",
    "vectordotproduct", "vxcl", "vectorexclude", "vang", "vectorangle", "clearscreen",
    "hudtext", "stage", "add", "remove", "warpto", "processor", "edit", "printlist", "node",
    "v", "r", "q", "createorbit", "rotatefromto", "lookdirup", "angleaxis", "latlng", "vessel",
    "body", "bodyexists", "bodyatmosphere", "bounds", "heading", "slidenote", "note",
    "getvoice", "stopallvoices", "time", "timestamp", "timespan", "hsv", "hsva", "rgb", "rgba",
    "vecdraw", "vecdrawargs", "clearvecdraws", "clearguis", "gui", "positionat", "velocityat",
    "highlight", "orbitat", "career", "allwaypoints", "waypoint", "transferall", "transfer",
    "lex", "lexicon", "list", "pidloop", "queue", "stack", "uniqueset", "abs", "mod", "floor",
    "ceiling", "round", "sqrt", "ln", "log10", "min", "max", "random", "randomseed", "char",
    "unchar", "print", "printat", "toggleflybywire", "selectautopilotmode", "run", "logfile",
    "reboot", "shutdown", "debugdump", "debugfreezegame", "profileresult",
    "makebuiltindelegate", "droppriority", "copy_deprecated", "rename_file_deprecated",
    "rename_volume_deprecated", "delete_deprecated", "scriptpath", "switch", "cd", "chdir",
    "copypath", "movepath", "deletepath", "writejson", "readjson", "exists", "open", "create",
    "createdir", "range", "constant", "sin", "cos", "tan", "arcsin", "arccos", "arctan",
    "arctan2", "anglediff", "path", "volume",
];

/// Built-in functions that can be captured as a delegate with `name@`.
///
/// Statement-like built-ins (`print`, `stage`, `run`...) are left out.
pub const ALIASABLE_FUNCTIONS: &[&str] = &[
    "vcrs", "vectorcrossproduct", "vdot", "vectordotproduct", "vxcl", "vectorexclude", "vang",
    "vectorangle", "hudtext", "node", "v", "r", "q", "createorbit", "rotatefromto", "lookdirup",
    "angleaxis", "latlng", "vessel", "body", "bodyexists", "bodyatmosphere", "heading",
    "note", "slidenote", "getvoice", "hsv", "hsva", "rgb", "rgba", "vecdraw", "vecdrawargs",
    "positionat", "velocityat", "highlight", "orbitat", "waypoint", "lex", "lexicon", "list",
    "pidloop", "queue", "stack", "uniqueset", "abs", "mod", "floor", "ceiling", "round", "sqrt",
    "ln", "log10", "min", "max", "random", "char", "unchar", "printat", "exists", "open",
    "range", "sin", "cos", "tan", "arcsin", "arccos", "arctan", "arctan2", "anglediff", "path",
    "timestamp", "timespan", "readjson", "writejson",
];

/// Constructors eligible for `name@:bind(...)` when called with numeric literals.
pub const BINDABLE_FUNCTIONS: &[&str] = &["v", "r", "q"];

/// Namespace object that qualifies built-in constants (`constant:pi`).
pub const CONSTANT_ROOT: &str = "constant";

/// Verbose references and the shorter built-in that means the same thing.
///
/// Applied top to bottom, so longer chains must come before their prefixes.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("ship:orbit", "obt"),
    ("ship:obt", "obt"),
    ("ship:name", "shipname"),
    ("ship:altitude", "altitude"),
    ("ship:apoapsis", "apoapsis"),
    ("ship:periapsis", "periapsis"),
    ("ship:velocity", "velocity"),
    ("ship:verticalspeed", "verticalspeed"),
    ("ship:groundspeed", "groundspeed"),
    ("ship:airspeed", "airspeed"),
    ("ship:latitude", "latitude"),
    ("ship:longitude", "longitude"),
    ("ship:geoposition", "geoposition"),
    ("ship:body", "body"),
    ("ship:facing", "facing"),
    ("ship:mass", "mass"),
    ("ship:maxthrust", "maxthrust"),
    ("ship:availablethrust", "availablethrust"),
    ("ship:status", "status"),
    ("ship:up", "up"),
    ("ship:north", "north"),
    ("ship:prograde", "prograde"),
    ("ship:retrograde", "retrograde"),
    ("ship:srfprograde", "srfprograde"),
    ("ship:srfretrograde", "srfretrograde"),
    ("ship:angularmomentum", "angularmomentum"),
    ("ship:angularvel", "angularvel"),
    ("ship:sensors", "sensors"),
    ("vectorcrossproduct", "vcrs"),
    ("vectordotproduct", "vdot"),
    ("vectorexclude", "vxcl"),
    ("vectorangle", "vang"),
    ("lexicon", "lex"),
    ("chdir", "cd"),
];

/// Union of keywords, bound variables, listables and built-in functions.
pub fn reserved_words() -> &'static HashSet<&'static str> {
    static RESERVED: OnceLock<HashSet<&'static str>> = OnceLock::new();
    RESERVED.get_or_init(|| {
        KEYWORDS
            .iter()
            .chain(BOUND_VARIABLES)
            .chain(LISTABLES)
            .chain(BUILTIN_FUNCTIONS)
            .copied()
            .collect()
    })
}

/// Whether `word` belongs to any reserved category.
pub fn is_reserved(word: &str) -> bool {
    reserved_words().contains(word)
}
