//! Formatting checked against the C library's `printf`.

use dconv::{FormatSpec, OutputCursor};

/// Directive, value, and what glibc's `snprintf` prints for it. The one deliberate difference is
/// `%#g` of `999999.5`, where glibc drops the zeros of a result that rounded up to a new power of
/// ten; C99 asks for `1.00000e+06`.
const PRINTF: &[(&str, f64, &str)] = &[
    ("%e", 0.0, "0.000000e+00"),
    ("%e", -0.0, "-0.000000e+00"),
    ("%e", 1.0, "1.000000e+00"),
    ("%e", -1.5, "-1.500000e+00"),
    ("%e", 0.5, "5.000000e-01"),
    ("%e", 2.5, "2.500000e+00"),
    ("%e", 0.1, "1.000000e-01"),
    ("%e", 1e-5, "1.000000e-05"),
    ("%e", 123456.789, "1.234568e+05"),
    ("%e", 9.9999999, "1.000000e+01"),
    ("%e", 1e21, "1.000000e+21"),
    ("%e", 1e-300, "1.000000e-300"),
    ("%e", 5e-324, "4.940656e-324"),
    ("%e", 1.7976931348623157e308, "1.797693e+308"),
    ("%e", 0.000123456, "1.234560e-04"),
    ("%e", 999999.5, "9.999995e+05"),
    ("%e", 1e100, "1.000000e+100"),
    ("%e", 3.141592653589793, "3.141593e+00"),
    ("%e", f64::INFINITY, "inf"),
    ("%e", f64::NEG_INFINITY, "-inf"),
    ("%.0e", 0.0, "0e+00"),
    ("%.0e", -0.0, "-0e+00"),
    ("%.0e", 1.0, "1e+00"),
    ("%.0e", -1.5, "-2e+00"),
    ("%.0e", 0.5, "5e-01"),
    ("%.0e", 2.5, "2e+00"),
    ("%.0e", 0.1, "1e-01"),
    ("%.0e", 1e-5, "1e-05"),
    ("%.0e", 123456.789, "1e+05"),
    ("%.0e", 9.9999999, "1e+01"),
    ("%.0e", 1e21, "1e+21"),
    ("%.0e", 1e-300, "1e-300"),
    ("%.0e", 5e-324, "5e-324"),
    ("%.0e", 1.7976931348623157e308, "2e+308"),
    ("%.0e", 0.000123456, "1e-04"),
    ("%.0e", 999999.5, "1e+06"),
    ("%.0e", 1e100, "1e+100"),
    ("%.0e", 3.141592653589793, "3e+00"),
    ("%.0e", f64::INFINITY, "inf"),
    ("%.0e", f64::NEG_INFINITY, "-inf"),
    ("%#.0e", 0.0, "0.e+00"),
    ("%#.0e", -0.0, "-0.e+00"),
    ("%#.0e", 1.0, "1.e+00"),
    ("%#.0e", -1.5, "-2.e+00"),
    ("%#.0e", 0.5, "5.e-01"),
    ("%#.0e", 2.5, "2.e+00"),
    ("%#.0e", 0.1, "1.e-01"),
    ("%#.0e", 1e-5, "1.e-05"),
    ("%#.0e", 123456.789, "1.e+05"),
    ("%#.0e", 9.9999999, "1.e+01"),
    ("%#.0e", 1e21, "1.e+21"),
    ("%#.0e", 1e-300, "1.e-300"),
    ("%#.0e", 5e-324, "5.e-324"),
    ("%#.0e", 1.7976931348623157e308, "2.e+308"),
    ("%#.0e", 0.000123456, "1.e-04"),
    ("%#.0e", 999999.5, "1.e+06"),
    ("%#.0e", 1e100, "1.e+100"),
    ("%#.0e", 3.141592653589793, "3.e+00"),
    ("%#.0e", f64::INFINITY, "inf"),
    ("%#.0e", f64::NEG_INFINITY, "-inf"),
    ("%.3e", 0.0, "0.000e+00"),
    ("%.3e", -0.0, "-0.000e+00"),
    ("%.3e", 1.0, "1.000e+00"),
    ("%.3e", -1.5, "-1.500e+00"),
    ("%.3e", 0.5, "5.000e-01"),
    ("%.3e", 2.5, "2.500e+00"),
    ("%.3e", 0.1, "1.000e-01"),
    ("%.3e", 1e-5, "1.000e-05"),
    ("%.3e", 123456.789, "1.235e+05"),
    ("%.3e", 9.9999999, "1.000e+01"),
    ("%.3e", 1e21, "1.000e+21"),
    ("%.3e", 1e-300, "1.000e-300"),
    ("%.3e", 5e-324, "4.941e-324"),
    ("%.3e", 1.7976931348623157e308, "1.798e+308"),
    ("%.3e", 0.000123456, "1.235e-04"),
    ("%.3e", 999999.5, "1.000e+06"),
    ("%.3e", 1e100, "1.000e+100"),
    ("%.3e", 3.141592653589793, "3.142e+00"),
    ("%.3e", f64::INFINITY, "inf"),
    ("%.3e", f64::NEG_INFINITY, "-inf"),
    ("%+.10e", 0.0, "+0.0000000000e+00"),
    ("%+.10e", -0.0, "-0.0000000000e+00"),
    ("%+.10e", 1.0, "+1.0000000000e+00"),
    ("%+.10e", -1.5, "-1.5000000000e+00"),
    ("%+.10e", 0.5, "+5.0000000000e-01"),
    ("%+.10e", 2.5, "+2.5000000000e+00"),
    ("%+.10e", 0.1, "+1.0000000000e-01"),
    ("%+.10e", 1e-5, "+1.0000000000e-05"),
    ("%+.10e", 123456.789, "+1.2345678900e+05"),
    ("%+.10e", 9.9999999, "+9.9999999000e+00"),
    ("%+.10e", 1e21, "+1.0000000000e+21"),
    ("%+.10e", 1e-300, "+1.0000000000e-300"),
    ("%+.10e", 5e-324, "+4.9406564584e-324"),
    ("%+.10e", 1.7976931348623157e308, "+1.7976931349e+308"),
    ("%+.10e", 0.000123456, "+1.2345600000e-04"),
    ("%+.10e", 999999.5, "+9.9999950000e+05"),
    ("%+.10e", 1e100, "+1.0000000000e+100"),
    ("%+.10e", 3.141592653589793, "+3.1415926536e+00"),
    ("%+.10e", f64::INFINITY, "+inf"),
    ("%+.10e", f64::NEG_INFINITY, "-inf"),
    ("%E", 0.0, "0.000000E+00"),
    ("%E", -0.0, "-0.000000E+00"),
    ("%E", 1.0, "1.000000E+00"),
    ("%E", -1.5, "-1.500000E+00"),
    ("%E", 0.5, "5.000000E-01"),
    ("%E", 2.5, "2.500000E+00"),
    ("%E", 0.1, "1.000000E-01"),
    ("%E", 1e-5, "1.000000E-05"),
    ("%E", 123456.789, "1.234568E+05"),
    ("%E", 9.9999999, "1.000000E+01"),
    ("%E", 1e21, "1.000000E+21"),
    ("%E", 1e-300, "1.000000E-300"),
    ("%E", 5e-324, "4.940656E-324"),
    ("%E", 1.7976931348623157e308, "1.797693E+308"),
    ("%E", 0.000123456, "1.234560E-04"),
    ("%E", 999999.5, "9.999995E+05"),
    ("%E", 1e100, "1.000000E+100"),
    ("%E", 3.141592653589793, "3.141593E+00"),
    ("%E", f64::INFINITY, "INF"),
    ("%E", f64::NEG_INFINITY, "-INF"),
    ("%012.4e", 0.0, "000.0000e+00"),
    ("%012.4e", -0.0, "-00.0000e+00"),
    ("%012.4e", 1.0, "001.0000e+00"),
    ("%012.4e", -1.5, "-01.5000e+00"),
    ("%012.4e", 0.5, "005.0000e-01"),
    ("%012.4e", 2.5, "002.5000e+00"),
    ("%012.4e", 0.1, "001.0000e-01"),
    ("%012.4e", 1e-5, "001.0000e-05"),
    ("%012.4e", 123456.789, "001.2346e+05"),
    ("%012.4e", 9.9999999, "001.0000e+01"),
    ("%012.4e", 1e21, "001.0000e+21"),
    ("%012.4e", 1e-300, "01.0000e-300"),
    ("%012.4e", 5e-324, "04.9407e-324"),
    ("%012.4e", 1.7976931348623157e308, "01.7977e+308"),
    ("%012.4e", 0.000123456, "001.2346e-04"),
    ("%012.4e", 999999.5, "001.0000e+06"),
    ("%012.4e", 1e100, "01.0000e+100"),
    ("%012.4e", 3.141592653589793, "003.1416e+00"),
    ("%012.4e", f64::INFINITY, "         inf"),
    ("%012.4e", f64::NEG_INFINITY, "        -inf"),
    ("%-12.3e", 0.0, "0.000e+00   "),
    ("%-12.3e", -0.0, "-0.000e+00  "),
    ("%-12.3e", 1.0, "1.000e+00   "),
    ("%-12.3e", -1.5, "-1.500e+00  "),
    ("%-12.3e", 0.5, "5.000e-01   "),
    ("%-12.3e", 2.5, "2.500e+00   "),
    ("%-12.3e", 0.1, "1.000e-01   "),
    ("%-12.3e", 1e-5, "1.000e-05   "),
    ("%-12.3e", 123456.789, "1.235e+05   "),
    ("%-12.3e", 9.9999999, "1.000e+01   "),
    ("%-12.3e", 1e21, "1.000e+21   "),
    ("%-12.3e", 1e-300, "1.000e-300  "),
    ("%-12.3e", 5e-324, "4.941e-324  "),
    ("%-12.3e", 1.7976931348623157e308, "1.798e+308  "),
    ("%-12.3e", 0.000123456, "1.235e-04   "),
    ("%-12.3e", 999999.5, "1.000e+06   "),
    ("%-12.3e", 1e100, "1.000e+100  "),
    ("%-12.3e", 3.141592653589793, "3.142e+00   "),
    ("%-12.3e", f64::INFINITY, "inf         "),
    ("%-12.3e", f64::NEG_INFINITY, "-inf        "),
    ("% e", 0.0, " 0.000000e+00"),
    ("% e", -0.0, "-0.000000e+00"),
    ("% e", 1.0, " 1.000000e+00"),
    ("% e", -1.5, "-1.500000e+00"),
    ("% e", 0.5, " 5.000000e-01"),
    ("% e", 2.5, " 2.500000e+00"),
    ("% e", 0.1, " 1.000000e-01"),
    ("% e", 1e-5, " 1.000000e-05"),
    ("% e", 123456.789, " 1.234568e+05"),
    ("% e", 9.9999999, " 1.000000e+01"),
    ("% e", 1e21, " 1.000000e+21"),
    ("% e", 1e-300, " 1.000000e-300"),
    ("% e", 5e-324, " 4.940656e-324"),
    ("% e", 1.7976931348623157e308, " 1.797693e+308"),
    ("% e", 0.000123456, " 1.234560e-04"),
    ("% e", 999999.5, " 9.999995e+05"),
    ("% e", 1e100, " 1.000000e+100"),
    ("% e", 3.141592653589793, " 3.141593e+00"),
    ("% e", f64::INFINITY, " inf"),
    ("% e", f64::NEG_INFINITY, "-inf"),
    ("%f", 0.0, "0.000000"),
    ("%f", -0.0, "-0.000000"),
    ("%f", 1.0, "1.000000"),
    ("%f", -1.5, "-1.500000"),
    ("%f", 0.5, "0.500000"),
    ("%f", 2.5, "2.500000"),
    ("%f", 0.1, "0.100000"),
    ("%f", 1e-5, "0.000010"),
    ("%f", 123456.789, "123456.789000"),
    ("%f", 9.9999999, "10.000000"),
    ("%f", 1e21, "1000000000000000000000.000000"),
    ("%f", 1e-300, "0.000000"),
    ("%f", 5e-324, "0.000000"),
    ("%f", 1.7976931348623157e308, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368.000000"),
    ("%f", 0.000123456, "0.000123"),
    ("%f", 999999.5, "999999.500000"),
    ("%f", 1e100, "10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104.000000"),
    ("%f", 3.141592653589793, "3.141593"),
    ("%f", f64::INFINITY, "inf"),
    ("%f", f64::NEG_INFINITY, "-inf"),
    ("%.0f", 0.0, "0"),
    ("%.0f", -0.0, "-0"),
    ("%.0f", 1.0, "1"),
    ("%.0f", -1.5, "-2"),
    ("%.0f", 0.5, "0"),
    ("%.0f", 2.5, "2"),
    ("%.0f", 0.1, "0"),
    ("%.0f", 1e-5, "0"),
    ("%.0f", 123456.789, "123457"),
    ("%.0f", 9.9999999, "10"),
    ("%.0f", 1e21, "1000000000000000000000"),
    ("%.0f", 1e-300, "0"),
    ("%.0f", 5e-324, "0"),
    ("%.0f", 1.7976931348623157e308, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368"),
    ("%.0f", 0.000123456, "0"),
    ("%.0f", 999999.5, "1000000"),
    ("%.0f", 1e100, "10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104"),
    ("%.0f", 3.141592653589793, "3"),
    ("%.0f", f64::INFINITY, "inf"),
    ("%.0f", f64::NEG_INFINITY, "-inf"),
    ("%#.0f", 0.0, "0."),
    ("%#.0f", -0.0, "-0."),
    ("%#.0f", 1.0, "1."),
    ("%#.0f", -1.5, "-2."),
    ("%#.0f", 0.5, "0."),
    ("%#.0f", 2.5, "2."),
    ("%#.0f", 0.1, "0."),
    ("%#.0f", 1e-5, "0."),
    ("%#.0f", 123456.789, "123457."),
    ("%#.0f", 9.9999999, "10."),
    ("%#.0f", 1e21, "1000000000000000000000."),
    ("%#.0f", 1e-300, "0."),
    ("%#.0f", 5e-324, "0."),
    ("%#.0f", 1.7976931348623157e308, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368."),
    ("%#.0f", 0.000123456, "0."),
    ("%#.0f", 999999.5, "1000000."),
    ("%#.0f", 1e100, "10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104."),
    ("%#.0f", 3.141592653589793, "3."),
    ("%#.0f", f64::INFINITY, "inf"),
    ("%#.0f", f64::NEG_INFINITY, "-inf"),
    ("%.2f", 0.0, "0.00"),
    ("%.2f", -0.0, "-0.00"),
    ("%.2f", 1.0, "1.00"),
    ("%.2f", -1.5, "-1.50"),
    ("%.2f", 0.5, "0.50"),
    ("%.2f", 2.5, "2.50"),
    ("%.2f", 0.1, "0.10"),
    ("%.2f", 1e-5, "0.00"),
    ("%.2f", 123456.789, "123456.79"),
    ("%.2f", 9.9999999, "10.00"),
    ("%.2f", 1e21, "1000000000000000000000.00"),
    ("%.2f", 1e-300, "0.00"),
    ("%.2f", 5e-324, "0.00"),
    ("%.2f", 1.7976931348623157e308, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368.00"),
    ("%.2f", 0.000123456, "0.00"),
    ("%.2f", 999999.5, "999999.50"),
    ("%.2f", 1e100, "10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104.00"),
    ("%.2f", 3.141592653589793, "3.14"),
    ("%.2f", f64::INFINITY, "inf"),
    ("%.2f", f64::NEG_INFINITY, "-inf"),
    ("%+.3f", 0.0, "+0.000"),
    ("%+.3f", -0.0, "-0.000"),
    ("%+.3f", 1.0, "+1.000"),
    ("%+.3f", -1.5, "-1.500"),
    ("%+.3f", 0.5, "+0.500"),
    ("%+.3f", 2.5, "+2.500"),
    ("%+.3f", 0.1, "+0.100"),
    ("%+.3f", 1e-5, "+0.000"),
    ("%+.3f", 123456.789, "+123456.789"),
    ("%+.3f", 9.9999999, "+10.000"),
    ("%+.3f", 1e21, "+1000000000000000000000.000"),
    ("%+.3f", 1e-300, "+0.000"),
    ("%+.3f", 5e-324, "+0.000"),
    ("%+.3f", 1.7976931348623157e308, "+179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368.000"),
    ("%+.3f", 0.000123456, "+0.000"),
    ("%+.3f", 999999.5, "+999999.500"),
    ("%+.3f", 1e100, "+10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104.000"),
    ("%+.3f", 3.141592653589793, "+3.142"),
    ("%+.3f", f64::INFINITY, "+inf"),
    ("%+.3f", f64::NEG_INFINITY, "-inf"),
    ("%010.3f", 0.0, "000000.000"),
    ("%010.3f", -0.0, "-00000.000"),
    ("%010.3f", 1.0, "000001.000"),
    ("%010.3f", -1.5, "-00001.500"),
    ("%010.3f", 0.5, "000000.500"),
    ("%010.3f", 2.5, "000002.500"),
    ("%010.3f", 0.1, "000000.100"),
    ("%010.3f", 1e-5, "000000.000"),
    ("%010.3f", 123456.789, "123456.789"),
    ("%010.3f", 9.9999999, "000010.000"),
    ("%010.3f", 1e21, "1000000000000000000000.000"),
    ("%010.3f", 1e-300, "000000.000"),
    ("%010.3f", 5e-324, "000000.000"),
    ("%010.3f", 1.7976931348623157e308, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368.000"),
    ("%010.3f", 0.000123456, "000000.000"),
    ("%010.3f", 999999.5, "999999.500"),
    ("%010.3f", 1e100, "10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104.000"),
    ("%010.3f", 3.141592653589793, "000003.142"),
    ("%010.3f", f64::INFINITY, "       inf"),
    ("%010.3f", f64::NEG_INFINITY, "      -inf"),
    ("%-10.1f", 0.0, "0.0       "),
    ("%-10.1f", -0.0, "-0.0      "),
    ("%-10.1f", 1.0, "1.0       "),
    ("%-10.1f", -1.5, "-1.5      "),
    ("%-10.1f", 0.5, "0.5       "),
    ("%-10.1f", 2.5, "2.5       "),
    ("%-10.1f", 0.1, "0.1       "),
    ("%-10.1f", 1e-5, "0.0       "),
    ("%-10.1f", 123456.789, "123456.8  "),
    ("%-10.1f", 9.9999999, "10.0      "),
    ("%-10.1f", 1e21, "1000000000000000000000.0"),
    ("%-10.1f", 1e-300, "0.0       "),
    ("%-10.1f", 5e-324, "0.0       "),
    ("%-10.1f", 1.7976931348623157e308, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368.0"),
    ("%-10.1f", 0.000123456, "0.0       "),
    ("%-10.1f", 999999.5, "999999.5  "),
    ("%-10.1f", 1e100, "10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104.0"),
    ("%-10.1f", 3.141592653589793, "3.1       "),
    ("%-10.1f", f64::INFINITY, "inf       "),
    ("%-10.1f", f64::NEG_INFINITY, "-inf      "),
    ("% .1f", 0.0, " 0.0"),
    ("% .1f", -0.0, "-0.0"),
    ("% .1f", 1.0, " 1.0"),
    ("% .1f", -1.5, "-1.5"),
    ("% .1f", 0.5, " 0.5"),
    ("% .1f", 2.5, " 2.5"),
    ("% .1f", 0.1, " 0.1"),
    ("% .1f", 1e-5, " 0.0"),
    ("% .1f", 123456.789, " 123456.8"),
    ("% .1f", 9.9999999, " 10.0"),
    ("% .1f", 1e21, " 1000000000000000000000.0"),
    ("% .1f", 1e-300, " 0.0"),
    ("% .1f", 5e-324, " 0.0"),
    ("% .1f", 1.7976931348623157e308, " 179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368.0"),
    ("% .1f", 0.000123456, " 0.0"),
    ("% .1f", 999999.5, " 999999.5"),
    ("% .1f", 1e100, " 10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104.0"),
    ("% .1f", 3.141592653589793, " 3.1"),
    ("% .1f", f64::INFINITY, " inf"),
    ("% .1f", f64::NEG_INFINITY, "-inf"),
    ("%F", 0.0, "0.000000"),
    ("%F", -0.0, "-0.000000"),
    ("%F", 1.0, "1.000000"),
    ("%F", -1.5, "-1.500000"),
    ("%F", 0.5, "0.500000"),
    ("%F", 2.5, "2.500000"),
    ("%F", 0.1, "0.100000"),
    ("%F", 1e-5, "0.000010"),
    ("%F", 123456.789, "123456.789000"),
    ("%F", 9.9999999, "10.000000"),
    ("%F", 1e21, "1000000000000000000000.000000"),
    ("%F", 1e-300, "0.000000"),
    ("%F", 5e-324, "0.000000"),
    ("%F", 1.7976931348623157e308, "179769313486231570814527423731704356798070567525844996598917476803157260780028538760589558632766878171540458953514382464234321326889464182768467546703537516986049910576551282076245490090389328944075868508455133942304583236903222948165808559332123348274797826204144723168738177180919299881250404026184124858368.000000"),
    ("%F", 0.000123456, "0.000123"),
    ("%F", 999999.5, "999999.500000"),
    ("%F", 1e100, "10000000000000000159028911097599180468360808563945281389781327557747838772170381060813469985856815104.000000"),
    ("%F", 3.141592653589793, "3.141593"),
    ("%F", f64::INFINITY, "INF"),
    ("%F", f64::NEG_INFINITY, "-INF"),
    ("%g", 0.0, "0"),
    ("%g", -0.0, "-0"),
    ("%g", 1.0, "1"),
    ("%g", -1.5, "-1.5"),
    ("%g", 0.5, "0.5"),
    ("%g", 2.5, "2.5"),
    ("%g", 0.1, "0.1"),
    ("%g", 1e-5, "1e-05"),
    ("%g", 123456.789, "123457"),
    ("%g", 9.9999999, "10"),
    ("%g", 1e21, "1e+21"),
    ("%g", 1e-300, "1e-300"),
    ("%g", 5e-324, "4.94066e-324"),
    ("%g", 1.7976931348623157e308, "1.79769e+308"),
    ("%g", 0.000123456, "0.000123456"),
    ("%g", 999999.5, "1e+06"),
    ("%g", 1e100, "1e+100"),
    ("%g", 3.141592653589793, "3.14159"),
    ("%g", f64::INFINITY, "inf"),
    ("%g", f64::NEG_INFINITY, "-inf"),
    ("%.0g", 0.0, "0"),
    ("%.0g", -0.0, "-0"),
    ("%.0g", 1.0, "1"),
    ("%.0g", -1.5, "-2"),
    ("%.0g", 0.5, "0.5"),
    ("%.0g", 2.5, "2"),
    ("%.0g", 0.1, "0.1"),
    ("%.0g", 1e-5, "1e-05"),
    ("%.0g", 123456.789, "1e+05"),
    ("%.0g", 9.9999999, "1e+01"),
    ("%.0g", 1e21, "1e+21"),
    ("%.0g", 1e-300, "1e-300"),
    ("%.0g", 5e-324, "5e-324"),
    ("%.0g", 1.7976931348623157e308, "2e+308"),
    ("%.0g", 0.000123456, "0.0001"),
    ("%.0g", 999999.5, "1e+06"),
    ("%.0g", 1e100, "1e+100"),
    ("%.0g", 3.141592653589793, "3"),
    ("%.0g", f64::INFINITY, "inf"),
    ("%.0g", f64::NEG_INFINITY, "-inf"),
    ("%#.0g", 0.0, "0."),
    ("%#.0g", -0.0, "-0."),
    ("%#.0g", 1.0, "1."),
    ("%#.0g", -1.5, "-2."),
    ("%#.0g", 0.5, "0.5"),
    ("%#.0g", 2.5, "2."),
    ("%#.0g", 0.1, "0.1"),
    ("%#.0g", 1e-5, "1.e-05"),
    ("%#.0g", 123456.789, "1.e+05"),
    ("%#.0g", 9.9999999, "1.e+01"),
    ("%#.0g", 1e21, "1.e+21"),
    ("%#.0g", 1e-300, "1.e-300"),
    ("%#.0g", 5e-324, "5.e-324"),
    ("%#.0g", 1.7976931348623157e308, "2.e+308"),
    ("%#.0g", 0.000123456, "0.0001"),
    ("%#.0g", 999999.5, "1.e+06"),
    ("%#.0g", 1e100, "1.e+100"),
    ("%#.0g", 3.141592653589793, "3."),
    ("%#.0g", f64::INFINITY, "inf"),
    ("%#.0g", f64::NEG_INFINITY, "-inf"),
    ("%.3g", 0.0, "0"),
    ("%.3g", -0.0, "-0"),
    ("%.3g", 1.0, "1"),
    ("%.3g", -1.5, "-1.5"),
    ("%.3g", 0.5, "0.5"),
    ("%.3g", 2.5, "2.5"),
    ("%.3g", 0.1, "0.1"),
    ("%.3g", 1e-5, "1e-05"),
    ("%.3g", 123456.789, "1.23e+05"),
    ("%.3g", 9.9999999, "10"),
    ("%.3g", 1e21, "1e+21"),
    ("%.3g", 1e-300, "1e-300"),
    ("%.3g", 5e-324, "4.94e-324"),
    ("%.3g", 1.7976931348623157e308, "1.8e+308"),
    ("%.3g", 0.000123456, "0.000123"),
    ("%.3g", 999999.5, "1e+06"),
    ("%.3g", 1e100, "1e+100"),
    ("%.3g", 3.141592653589793, "3.14"),
    ("%.3g", f64::INFINITY, "inf"),
    ("%.3g", f64::NEG_INFINITY, "-inf"),
    ("%#g", 0.0, "0.00000"),
    ("%#g", -0.0, "-0.00000"),
    ("%#g", 1.0, "1.00000"),
    ("%#g", -1.5, "-1.50000"),
    ("%#g", 0.5, "0.500000"),
    ("%#g", 2.5, "2.50000"),
    ("%#g", 0.1, "0.100000"),
    ("%#g", 1e-5, "1.00000e-05"),
    ("%#g", 123456.789, "123457."),
    ("%#g", 9.9999999, "10.0000"),
    ("%#g", 1e21, "1.00000e+21"),
    ("%#g", 1e-300, "1.00000e-300"),
    ("%#g", 5e-324, "4.94066e-324"),
    ("%#g", 1.7976931348623157e308, "1.79769e+308"),
    ("%#g", 0.000123456, "0.000123456"),
    ("%#g", 999999.5, "1.00000e+06"),
    ("%#g", 1e100, "1.00000e+100"),
    ("%#g", 3.141592653589793, "3.14159"),
    ("%#g", f64::INFINITY, "inf"),
    ("%#g", f64::NEG_INFINITY, "-inf"),
    ("%.17g", 0.0, "0"),
    ("%.17g", -0.0, "-0"),
    ("%.17g", 1.0, "1"),
    ("%.17g", -1.5, "-1.5"),
    ("%.17g", 0.5, "0.5"),
    ("%.17g", 2.5, "2.5"),
    ("%.17g", 0.1, "0.10000000000000001"),
    ("%.17g", 1e-5, "1.0000000000000001e-05"),
    ("%.17g", 123456.789, "123456.789"),
    ("%.17g", 9.9999999, "9.9999999000000006"),
    ("%.17g", 1e21, "1e+21"),
    ("%.17g", 1e-300, "1e-300"),
    ("%.17g", 5e-324, "4.9406564584124654e-324"),
    ("%.17g", 1.7976931348623157e308, "1.7976931348623157e+308"),
    ("%.17g", 0.000123456, "0.00012345600000000001"),
    ("%.17g", 999999.5, "999999.5"),
    ("%.17g", 1e100, "1e+100"),
    ("%.17g", 3.141592653589793, "3.1415926535897931"),
    ("%.17g", f64::INFINITY, "inf"),
    ("%.17g", f64::NEG_INFINITY, "-inf"),
    ("%G", 0.0, "0"),
    ("%G", -0.0, "-0"),
    ("%G", 1.0, "1"),
    ("%G", -1.5, "-1.5"),
    ("%G", 0.5, "0.5"),
    ("%G", 2.5, "2.5"),
    ("%G", 0.1, "0.1"),
    ("%G", 1e-5, "1E-05"),
    ("%G", 123456.789, "123457"),
    ("%G", 9.9999999, "10"),
    ("%G", 1e21, "1E+21"),
    ("%G", 1e-300, "1E-300"),
    ("%G", 5e-324, "4.94066E-324"),
    ("%G", 1.7976931348623157e308, "1.79769E+308"),
    ("%G", 0.000123456, "0.000123456"),
    ("%G", 999999.5, "1E+06"),
    ("%G", 1e100, "1E+100"),
    ("%G", 3.141592653589793, "3.14159"),
    ("%G", f64::INFINITY, "INF"),
    ("%G", f64::NEG_INFINITY, "-INF"),
    ("%010g", 0.0, "0000000000"),
    ("%010g", -0.0, "-000000000"),
    ("%010g", 1.0, "0000000001"),
    ("%010g", -1.5, "-0000001.5"),
    ("%010g", 0.5, "00000000.5"),
    ("%010g", 2.5, "00000002.5"),
    ("%010g", 0.1, "00000000.1"),
    ("%010g", 1e-5, "000001e-05"),
    ("%010g", 123456.789, "0000123457"),
    ("%010g", 9.9999999, "0000000010"),
    ("%010g", 1e21, "000001e+21"),
    ("%010g", 1e-300, "00001e-300"),
    ("%010g", 5e-324, "4.94066e-324"),
    ("%010g", 1.7976931348623157e308, "1.79769e+308"),
    ("%010g", 0.000123456, "0.000123456"),
    ("%010g", 999999.5, "000001e+06"),
    ("%010g", 1e100, "00001e+100"),
    ("%010g", 3.141592653589793, "0003.14159"),
    ("%010g", f64::INFINITY, "       inf"),
    ("%010g", f64::NEG_INFINITY, "      -inf"),
    ("%-10g", 0.0, "0         "),
    ("%-10g", -0.0, "-0        "),
    ("%-10g", 1.0, "1         "),
    ("%-10g", -1.5, "-1.5      "),
    ("%-10g", 0.5, "0.5       "),
    ("%-10g", 2.5, "2.5       "),
    ("%-10g", 0.1, "0.1       "),
    ("%-10g", 1e-5, "1e-05     "),
    ("%-10g", 123456.789, "123457    "),
    ("%-10g", 9.9999999, "10        "),
    ("%-10g", 1e21, "1e+21     "),
    ("%-10g", 1e-300, "1e-300    "),
    ("%-10g", 5e-324, "4.94066e-324"),
    ("%-10g", 1.7976931348623157e308, "1.79769e+308"),
    ("%-10g", 0.000123456, "0.000123456"),
    ("%-10g", 999999.5, "1e+06     "),
    ("%-10g", 1e100, "1e+100    "),
    ("%-10g", 3.141592653589793, "3.14159   "),
    ("%-10g", f64::INFINITY, "inf       "),
    ("%-10g", f64::NEG_INFINITY, "-inf      "),
    ("%+g", 0.0, "+0"),
    ("%+g", -0.0, "-0"),
    ("%+g", 1.0, "+1"),
    ("%+g", -1.5, "-1.5"),
    ("%+g", 0.5, "+0.5"),
    ("%+g", 2.5, "+2.5"),
    ("%+g", 0.1, "+0.1"),
    ("%+g", 1e-5, "+1e-05"),
    ("%+g", 123456.789, "+123457"),
    ("%+g", 9.9999999, "+10"),
    ("%+g", 1e21, "+1e+21"),
    ("%+g", 1e-300, "+1e-300"),
    ("%+g", 5e-324, "+4.94066e-324"),
    ("%+g", 1.7976931348623157e308, "+1.79769e+308"),
    ("%+g", 0.000123456, "+0.000123456"),
    ("%+g", 999999.5, "+1e+06"),
    ("%+g", 1e100, "+1e+100"),
    ("%+g", 3.141592653589793, "+3.14159"),
    ("%+g", f64::INFINITY, "+inf"),
    ("%+g", f64::NEG_INFINITY, "-inf"),
    ("%.10g", 0.0, "0"),
    ("%.10g", -0.0, "-0"),
    ("%.10g", 1.0, "1"),
    ("%.10g", -1.5, "-1.5"),
    ("%.10g", 0.5, "0.5"),
    ("%.10g", 2.5, "2.5"),
    ("%.10g", 0.1, "0.1"),
    ("%.10g", 1e-5, "1e-05"),
    ("%.10g", 123456.789, "123456.789"),
    ("%.10g", 9.9999999, "9.9999999"),
    ("%.10g", 1e21, "1e+21"),
    ("%.10g", 1e-300, "1e-300"),
    ("%.10g", 5e-324, "4.940656458e-324"),
    ("%.10g", 1.7976931348623157e308, "1.797693135e+308"),
    ("%.10g", 0.000123456, "0.000123456"),
    ("%.10g", 999999.5, "999999.5"),
    ("%.10g", 1e100, "1e+100"),
    ("%.10g", 3.141592653589793, "3.141592654"),
    ("%.10g", f64::INFINITY, "inf"),
    ("%.10g", f64::NEG_INFINITY, "-inf"),
];

fn format_to_string(directive: &str, num: f64) -> String {
    let spec: FormatSpec = directive.parse().unwrap();
    let mut buf = [0u8; 512];
    let mut cursor = OutputCursor::new(&mut buf);
    let written = dconv::format(&mut cursor, num, &spec).unwrap();
    assert_eq!(written, cursor.position());
    cursor.as_str().to_string()
}

#[test]
fn printf_table() {
    let mut failures = Vec::new();
    for &(directive, num, expected) in PRINTF {
        let got = format_to_string(directive, num);
        if got != expected {
            failures.push(format!("{directive} {num:e}: expected {expected:?}, got {got:?}"));
        }
    }
    assert!(failures.is_empty(), "{} mismatches:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn scans_back() {
    for &(directive, num, expected) in PRINTF {
        // only directives that keep every digit of the value
        if !num.is_finite() || !directive.contains(".17") {
            continue
        }
        let scanned = dconv::scan_double(expected.trim()).unwrap();
        assert_eq!(scanned.value.to_bits(), num.to_bits(), "{directive} {expected:?}");
        assert!(!scanned.range_exceeded);
    }
}

#[test]
fn nan() {
    for directive in ["%e", "%+f", "% g", "%#.3e", "%-5g"] {
        assert_eq!(format_to_string(directive, f64::NAN).trim(), "nan", "{directive}");
        assert_eq!(format_to_string(directive, -f64::NAN).trim(), "nan", "{directive}");
    }
    assert_eq!(format_to_string("%8E", f64::NAN), "     NAN");
    assert_eq!(format_to_string("%-8G", f64::NAN), "NAN     ");
}
