//! Parse CSS color strings into straight RGBA bytes.
//!
//! Supported are hex notation, `rgb()`/`rgba()` and `hsl()`/`hsla()` in the
//! comma separated syntax as well as the space separated syntax with an
//! optional `/ alpha`, plus the CSS named colors.

use crate::color::Component;

const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

/// Parse a CSS color string into `[red, green, blue, alpha]`.
pub(crate) fn parse_color(value: &str) -> Option<[u8; 4]> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some((name, rest)) = value.split_once('(') {
        let args = rest.strip_suffix(')')?;
        return match name {
            "rgb" | "rgba" => parse_rgb(args),
            "hsl" | "hsla" => parse_hsl(args),
            _ => None,
        };
    }

    if value == "transparent" {
        return Some([0, 0, 0, 0]);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == value)
        .map(|&(_, rgb)| {
            let [_, red, green, blue] = rgb.to_be_bytes();
            [red, green, blue, u8::MAX]
        })
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    // `to_digit` only accepts hex digits, so signs and whitespace fail here.
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<_>>>()?;

    let double = |d: u8| (d << 4) | d;
    let pair = |hi: u8, lo: u8| (hi << 4) | lo;

    match *digits.as_slice() {
        [r, g, b] => Some([double(r), double(g), double(b), u8::MAX]),
        [r, g, b, a] => Some([double(r), double(g), double(b), double(a)]),
        [r1, r0, g1, g0, b1, b0] => Some([pair(r1, r0), pair(g1, g0), pair(b1, b0), u8::MAX]),
        [r1, r0, g1, g0, b1, b0, a1, a0] => Some([
            pair(r1, r0),
            pair(g1, g0),
            pair(b1, b0),
            pair(a1, a0),
        ]),
        _ => None,
    }
}

/// Split the arguments of a color function into its three components and
/// the optional alpha.
fn split_args(args: &str) -> Option<([&str; 3], Option<&str>)> {
    let args = args.trim();

    let (parts, alpha) = if args.contains(',') {
        let mut parts = args.split(',').map(str::trim).collect::<Vec<_>>();
        let alpha = if parts.len() == 4 { parts.pop() } else { None };
        (parts, alpha)
    } else {
        let (color, alpha) = match args.split_once('/') {
            Some((color, alpha)) => (color, Some(alpha.trim())),
            None => (args, None),
        };
        (color.split_whitespace().collect::<Vec<_>>(), alpha)
    };

    match *parts.as_slice() {
        [a, b, c] => Some(([a, b, c], alpha)),
        _ => None,
    }
}

fn number(value: &str) -> Option<Component> {
    let v = value.parse::<Component>().ok()?;
    v.is_finite().then_some(v)
}

/// A percentage, or a plain number in `0..=scale`, as a fraction.
fn fraction(value: &str, scale: Component) -> Option<Component> {
    match value.strip_suffix('%') {
        Some(percent) => Some(number(percent)? / 100.0),
        None => Some(number(value)? / scale),
    }
}

fn to_byte(fraction: Component) -> u8 {
    (fraction.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_alpha(alpha: Option<&str>) -> Option<u8> {
    match alpha {
        Some(alpha) => fraction(alpha, 1.0).map(to_byte),
        None => Some(u8::MAX),
    }
}

fn parse_rgb(args: &str) -> Option<[u8; 4]> {
    let ([r, g, b], alpha) = split_args(args)?;
    Some([
        to_byte(fraction(r, 255.0)?),
        to_byte(fraction(g, 255.0)?),
        to_byte(fraction(b, 255.0)?),
        parse_alpha(alpha)?,
    ])
}

/// A hue angle as a fraction of a full turn.
fn hue(value: &str) -> Option<Component> {
    let degrees = if let Some(v) = value.strip_suffix("deg") {
        number(v)?
    } else if let Some(v) = value.strip_suffix("grad") {
        number(v)? * 0.9
    } else if let Some(v) = value.strip_suffix("rad") {
        number(v)?.to_degrees()
    } else if let Some(v) = value.strip_suffix("turn") {
        number(v)? * 360.0
    } else {
        number(value)?
    };
    Some(degrees.rem_euclid(360.0) / 360.0)
}

fn parse_hsl(args: &str) -> Option<[u8; 4]> {
    let ([h, s, l], alpha) = split_args(args)?;
    let (red, green, blue) = hsl_to_rgb(
        hue(h)?,
        fraction(s, 100.0)?.clamp(0.0, 1.0),
        fraction(l, 100.0)?.clamp(0.0, 1.0),
    );
    Some([to_byte(red), to_byte(green), to_byte(blue), parse_alpha(alpha)?])
}

/// HSL with every component in `0..=1` to RGB in `0..=1`.
fn hsl_to_rgb(h: Component, s: Component, l: Component) -> (Component, Component, Component) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: Component| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };

    (
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}
