use super::LayoutDef;

pub(crate) const POR: LayoutDef = LayoutDef {
    code: "por",
    name: "Português",
    locale: "pt-PT",
    normal: &[
        "\\ 1 2 3 4 5 6 7 8 9 0 ' \u{ab} {bksp}",
        "q w e r t y u i o p + \u{b4}",
        "{change} a s d f g h j k l \u{e7} \u{ba} ~",
        "{shift} z x c v b n m , . - {shift}",
        "{alt} &nbsp {alt}",
    ],
    shift: &[
        "| ! \" # $ % &amp; / ( ) = ? \u{bb} {bksp}",
        "Q W E R T Y U I O P * `",
        "{change} A S D F G H J K L \u{c7} \u{aa} ^",
        "{shift} Z X C V B N M ; : _ {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt: &[
        "{} &lt; @ \u{a3} \u{a7} {} {} { [ ] } {} {} {bksp}",
        "{} {} \u{20ac} {} {} {} {} {} {} {} \u{a8} {}",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {}",
        "{shift} {} {} {} {} {} {} {} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    alt_shift: &[
        "{} &gt; @ \u{a3} \u{a7} {} {} { [ ] } {} {} {bksp}",
        "{} {} \u{20ac} {} {} {} {} {} {} {} \u{a8} {}",
        "{change} {} {} {} {} {} {} {} {} {} {} {} {}",
        "{shift} {} {} {} {} {} {} {} {} {} {} {shift}",
        "{alt} &nbsp {alt}",
    ],
    transforms: &[
        ("` ", "`"),
        ("`A", "\u{c0}"),
        ("`E", "\u{c8}"),
        ("`I", "\u{cc}"),
        ("`N", "\u{1f8}"),
        ("`O", "\u{d2}"),
        ("`U", "\u{d9}"),
        ("`W", "\u{1e80}"),
        ("`Y", "\u{1ef2}"),
        ("`a", "\u{e0}"),
        ("`e", "\u{e8}"),
        ("`i", "\u{ec}"),
        ("`n", "\u{1f9}"),
        ("`o", "\u{f2}"),
        ("`u", "\u{f9}"),
        ("`w", "\u{1e81}"),
        ("`y", "\u{1ef3}"),
        ("\u{a8} ", "\u{a8}"),
        ("\u{a8}A", "\u{c4}"),
        ("\u{a8}E", "\u{cb}"),
        ("\u{a8}H", "\u{1e26}"),
        ("\u{a8}I", "\u{cf}"),
        ("\u{a8}O", "\u{d6}"),
        ("\u{a8}U", "\u{dc}"),
        ("\u{a8}W", "\u{1e84}"),
        ("\u{a8}X", "\u{1e8c}"),
        ("\u{a8}Y", "\u{178}"),
        ("\u{a8}a", "\u{e4}"),
        ("\u{a8}e", "\u{eb}"),
        ("\u{a8}h", "\u{1e27}"),
        ("\u{a8}i", "\u{ef}"),
        ("\u{a8}o", "\u{f6}"),
        ("\u{a8}t", "\u{1e97}"),
        ("\u{a8}u", "\u{fc}"),
        ("\u{a8}w", "\u{1e85}"),
        ("\u{a8}x", "\u{1e8d}"),
        ("\u{a8}y", "\u{ff}"),
        ("^ ", "^"),
        ("^A", "\u{c2}"),
        ("^C", "\u{108}"),
        ("^E", "\u{ca}"),
        ("^G", "\u{11c}"),
        ("^H", "\u{124}"),
        ("^I", "\u{ce}"),
        ("^J", "\u{134}"),
        ("^O", "\u{d4}"),
        ("^S", "\u{15c}"),
        ("^U", "\u{db}"),
        ("^W", "\u{174}"),
        ("^Y", "\u{176}"),
        ("^Z", "\u{1e90}"),
        ("^a", "\u{e2}"),
        ("^c", "\u{109}"),
        ("^e", "\u{ea}"),
        ("^g", "\u{11d}"),
        ("^h", "\u{125}"),
        ("^i", "\u{ee}"),
        ("^j", "\u{135}"),
        ("^o", "\u{f4}"),
        ("^s", "\u{15d}"),
        ("^u", "\u{fb}"),
        ("^w", "\u{175}"),
        ("^y", "\u{177}"),
        ("^z", "\u{1e91}"),
        ("\u{b4} ", "\u{b4}"),
        ("\u{b4}A", "\u{c1}"),
        ("\u{b4}C", "\u{106}"),
        ("\u{b4}E", "\u{c9}"),
        ("\u{b4}G", "\u{1f4}"),
        ("\u{b4}I", "\u{cd}"),
        ("\u{b4}K", "\u{1e30}"),
        ("\u{b4}L", "\u{139}"),
        ("\u{b4}M", "\u{1e3e}"),
        ("\u{b4}N", "\u{143}"),
        ("\u{b4}O", "\u{d3}"),
        ("\u{b4}P", "\u{1e54}"),
        ("\u{b4}R", "\u{154}"),
        ("\u{b4}S", "\u{15a}"),
        ("\u{b4}U", "\u{da}"),
        ("\u{b4}W", "\u{1e82}"),
        ("\u{b4}Y", "\u{dd}"),
        ("\u{b4}Z", "\u{179}"),
        ("\u{b4}a", "\u{e1}"),
        ("\u{b4}c", "\u{107}"),
        ("\u{b4}e", "\u{e9}"),
        ("\u{b4}g", "\u{1f5}"),
        ("\u{b4}i", "\u{ed}"),
        ("\u{b4}k", "\u{1e31}"),
        ("\u{b4}l", "\u{13a}"),
        ("\u{b4}m", "\u{1e3f}"),
        ("\u{b4}n", "\u{144}"),
        ("\u{b4}o", "\u{f3}"),
        ("\u{b4}p", "\u{1e55}"),
        ("\u{b4}r", "\u{155}"),
        ("\u{b4}s", "\u{15b}"),
        ("\u{b4}u", "\u{fa}"),
        ("\u{b4}w", "\u{1e83}"),
        ("\u{b4}y", "\u{fd}"),
        ("\u{b4}z", "\u{17a}"),
        ("\u{b4}\u{c7}", "\u{1e08}"),
        ("\u{b4}\u{e7}", "\u{1e09}"),
        ("~ ", "~"),
        ("~A", "\u{c3}"),
        ("~E", "\u{1ebc}"),
        ("~I", "\u{128}"),
        ("~N", "\u{d1}"),
        ("~O", "\u{d5}"),
        ("~U", "\u{168}"),
        ("~V", "\u{1e7c}"),
        ("~Y", "\u{1ef8}"),
        ("~a", "\u{e3}"),
        ("~e", "\u{1ebd}"),
        ("~i", "\u{129}"),
        ("~n", "\u{f1}"),
        ("~o", "\u{f5}"),
        ("~u", "\u{169}"),
        ("~v", "\u{1e7d}"),
        ("~y", "\u{1ef9}"),
    ],
};
