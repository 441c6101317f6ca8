//! The built-in safe vocabulary: SVG element and attribute names that are
//! permitted by default.
//!
//! The tables cover structural, shape, gradient, filter-primitive and text
//! elements, and presentation, geometry, animation and filter attributes,
//! plus the small fixed set of namespaced attribute keys (`xlink:href`,
//! `xml:id`, `xlink:title`, `xml:space`, `xmlns:xlink`). Everything outside
//! this vocabulary is rejected unless explicitly whitelisted on a specific
//! [`Validator`](crate::Validator) instance.
//!
//! The accessor functions return a fresh, independently owned copy on every
//! call. Nothing in this crate hands out a shared mutable view of these
//! tables; a whitelist or blacklist call on one validator can never leak
//! into another (see [`PolicyStore`](crate::PolicyStore)).

use std::collections::HashSet;

/// Element names accepted by default.
///
/// Filter primitives are spelled in their camelCase source form here; the
/// sets returned by [`default_elements`] are lower-cased, matching the
/// normalization applied to every observed tag name before lookup.
const SVG_ELEMENTS: &[&str] = &[
    "svg",
    "altglyph",
    "altglyphdef",
    "altglyphitem",
    "animatecolor",
    "animatemotion",
    "animatetransform",
    "circle",
    "clippath",
    "defs",
    "desc",
    "ellipse",
    "filter",
    "font",
    "g",
    "glyph",
    "glyphref",
    "hkern",
    "image",
    "line",
    "lineargradient",
    "marker",
    "mask",
    "metadata",
    "mpath",
    "path",
    "pattern",
    "polygon",
    "polyline",
    "radialgradient",
    "rect",
    "stop",
    "switch",
    "symbol",
    "text",
    "textpath",
    "title",
    "tref",
    "tspan",
    "use",
    "view",
    "vkern",
    "feBlend",
    "feColorMatrix",
    "feComponentTransfer",
    "feComposite",
    "feConvolveMatrix",
    "feDiffuseLighting",
    "feDisplacementMap",
    "feDistantLight",
    "feFlood",
    "feFuncA",
    "feFuncB",
    "feFuncG",
    "feFuncR",
    "feGaussianBlur",
    "feMerge",
    "feMergeNode",
    "feMorphology",
    "feOffset",
    "fePointLight",
    "feSpecularLighting",
    "feSpotLight",
    "feTile",
    "feTurbulence",
];

/// Attribute keys accepted by default.
///
/// Unqualified keys plus the namespaced keys at the end of the table.
/// The table derives from the DOMPurify SVG allow-lists; `additivive`
/// appears there as published.
const SVG_ATTRIBUTES: &[&str] = &[
    "accent-height",
    "accumulate",
    "additivive",
    "alignment-baseline",
    "ascent",
    "attributename",
    "attributetype",
    "azimuth",
    "baseprofile",
    "basefrequency",
    "baseline-shift",
    "begin",
    "bias",
    "by",
    "class",
    "clip",
    "clip-path",
    "clip-rule",
    "color",
    "color-interpolation",
    "color-interpolation-filters",
    "color-profile",
    "color-rendering",
    "cx",
    "cy",
    "d",
    "dx",
    "dy",
    "diffuseconstant",
    "direction",
    "display",
    "divisor",
    "dur",
    "edgemode",
    "elevation",
    "end",
    "fill",
    "fill-opacity",
    "fill-rule",
    "filter",
    "flood-color",
    "flood-opacity",
    "font-family",
    "font-size",
    "font-size-adjust",
    "font-stretch",
    "font-style",
    "font-variant",
    "font-weight",
    "fx",
    "fy",
    "g1",
    "g2",
    "glyph-name",
    "glyphref",
    "gradientunits",
    "gradienttransform",
    "height",
    "href",
    "id",
    "image-rendering",
    "in",
    "in2",
    "k",
    "k1",
    "k2",
    "k3",
    "k4",
    "kerning",
    "keypoints",
    "keysplines",
    "keytimes",
    "lang",
    "lengthadjust",
    "letter-spacing",
    "kernelmatrix",
    "kernelunitlength",
    "lighting-color",
    "local",
    "marker-end",
    "marker-mid",
    "marker-start",
    "markerheight",
    "markerunits",
    "markerwidth",
    "maskcontentunits",
    "maskunits",
    "max",
    "mask",
    "media",
    "method",
    "mode",
    "min",
    "name",
    "numoctaves",
    "offset",
    "operator",
    "opacity",
    "order",
    "orient",
    "orientation",
    "origin",
    "overflow",
    "paint-order",
    "path",
    "pathlength",
    "patterncontentunits",
    "patterntransform",
    "patternunits",
    "points",
    "preservealpha",
    "preserveaspectratio",
    "r",
    "rx",
    "ry",
    "radius",
    "refx",
    "refy",
    "repeatcount",
    "repeatdur",
    "restart",
    "result",
    "rotate",
    "scale",
    "seed",
    "shape-rendering",
    "specularconstant",
    "specularexponent",
    "spreadmethod",
    "stddeviation",
    "stitchtiles",
    "stop-color",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke",
    "stroke-width",
    "style",
    "surfacescale",
    "tabindex",
    "targetx",
    "targety",
    "transform",
    "text-anchor",
    "text-decoration",
    "text-rendering",
    "textlength",
    "type",
    "u1",
    "u2",
    "unicode",
    "version",
    "values",
    "viewbox",
    "visibility",
    "vert-adv-y",
    "vert-origin-x",
    "vert-origin-y",
    "width",
    "word-spacing",
    "wrap",
    "writing-mode",
    "xchannelselector",
    "ychannelselector",
    "x",
    "x1",
    "x2",
    "xmlns",
    "y",
    "y1",
    "y2",
    "z",
    "zoomandpan",
    "xlink:href",
    "xml:id",
    "xlink:title",
    "xml:space",
    "xmlns:xlink",
];

/// Returns a fresh copy of the default element allow-list, lower-cased.
///
/// # Examples
///
/// ```
/// let elements = svg_guard::vocabulary::default_elements();
/// assert!(elements.contains("svg"));
/// assert!(elements.contains("feblend")); // stored lower-case
/// assert!(!elements.contains("script"));
/// ```
pub fn default_elements() -> HashSet<String> {
    SVG_ELEMENTS.iter().map(|e| e.to_lowercase()).collect()
}

/// Returns a fresh copy of the default attribute allow-list, lower-cased.
///
/// # Examples
///
/// ```
/// let attributes = svg_guard::vocabulary::default_attributes();
/// assert!(attributes.contains("fill"));
/// assert!(attributes.contains("xlink:href"));
/// assert!(!attributes.contains("onload"));
/// ```
pub fn default_attributes() -> HashSet<String> {
    SVG_ATTRIBUTES.iter().map(|a| a.to_lowercase()).collect()
}
