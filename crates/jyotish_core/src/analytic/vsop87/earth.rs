//! Earth.

use super::{Series, Term};

const L0: [Term; 93] = [
    (1.75347045673, 0.0, 0.0),
    (0.03341656456, 4.66925680417, 6283.0758499914),
    (0.00034894275, 4.62610241759, 12566.1516999828),
    (0.00003417571, 2.82886579606, 3.523118349),
    (0.00003497056, 2.74411800971, 5753.3848848968),
    (0.00003135896, 3.62767041758, 77713.7714681205),
    (0.00002676218, 4.41808351397, 7860.4193924392),
    (0.00002342687, 6.13516237631, 3930.2096962196),
    (0.00001273166, 2.03709655772, 529.6909650946),
    (0.00001324292, 0.74246356352, 11506.7697697936),
    (0.00000901855, 2.04505443513, 26.2983197998),
    (0.00001199167, 1.10962944315, 1577.3435424478),
    (0.00000857223, 3.50849156957, 398.1490034082),
    (0.00000779786, 1.17882652114, 5223.6939198022),
    (0.0000099025, 5.23268129594, 5884.9268465832),
    (0.00000753141, 2.53339053818, 5507.5532386674),
    (0.00000505264, 4.58292563052, 18849.2275499742),
    (0.00000492379, 4.20506639861, 775.522611324),
    (0.00000356655, 2.91954116867, 0.0673103028),
    (0.00000284125, 1.89869034186, 796.2980068164),
    (0.0000024281, 0.34481140906, 5486.777843175),
    (0.00000317087, 5.84901952218, 11790.6290886588),
    (0.00000271039, 0.31488607649, 10977.078804699),
    (0.0000020616, 4.80646606059, 2544.3144198834),
    (0.00000205385, 1.86947813692, 5573.1428014331),
    (0.00000202261, 2.45767795458, 6069.7767545534),
    (0.00000126184, 1.0830263021, 20.7753954924),
    (0.00000155516, 0.83306073807, 213.299095438),
    (0.00000115132, 0.64544911683, 0.9803210682),
    (0.00000102851, 0.63599846727, 4694.0029547076),
    (0.00000101724, 4.26679821365, 7.1135470008),
    (0.00000099206, 6.20992940258, 2146.1654164752),
    (0.00000132212, 3.41118275555, 2942.4634232916),
    (0.00000097607, 0.6810127227, 155.4203994342),
    (0.00000085128, 1.29870743025, 6275.9623029906),
    (0.00000074651, 1.75508916159, 5088.6288397668),
    (0.00000101895, 0.97569221824, 15720.8387848784),
    (0.00000084711, 3.67080093025, 71430.69561812909),
    (0.00000073547, 4.67926565481, 801.8209311238),
    (0.00000073874, 3.50319443167, 3154.6870848956),
    (0.00000078756, 3.03698313141, 12036.4607348882),
    (0.00000079637, 1.807913307, 17260.1546546904),
    (0.00000085803, 5.98322631256, 161000.6857376741),
    (0.00000056963, 2.78430398043, 6286.5989683404),
    (0.00000061148, 1.81839811024, 7084.8967811152),
    (0.00000069627, 0.83297596966, 9437.762934887),
    (0.00000056116, 4.38694880779, 14143.4952424306),
    (0.00000062449, 3.97763880587, 8827.3902698748),
    (0.00000051145, 0.28306864501, 5856.4776591154),
    (0.00000055577, 3.47006009062, 6279.5527316424),
    (0.00000041036, 5.36817351402, 8429.2412664666),
    (0.00000051605, 1.33282746983, 1748.016413067),
    (0.00000051992, 0.18914945834, 12139.5535091068),
    (0.00000049, 0.48735065033, 1194.4470102246),
    (0.000000392, 6.16832995016, 10447.3878396044),
    (0.00000035566, 1.77597314691, 6812.766815086),
    (0.0000003677, 6.04133859347, 10213.285546211),
    (0.00000036596, 2.56955238628, 1059.3819301892),
    (0.00000033291, 0.59309499459, 17789.845619785),
    (0.00000035954, 1.70876111898, 2352.8661537718),
    (0.00000040938, 2.39850881707, 19651.048481098),
    (0.00000030047, 2.73975123935, 1349.8674096588),
    (0.00000030412, 0.44294464135, 83996.84731811189),
    (0.00000023663, 0.48473567763, 8031.0922630584),
    (0.00000023574, 2.06527720049, 3340.6124266998),
    (0.00000021089, 4.14825464101, 951.7184062506),
    (0.00000024738, 0.21484762138, 3.5904286518),
    (0.00000025352, 3.16470953405, 4690.4798363586),
    (0.0000002282, 5.22197888032, 4705.7323075436),
    (0.00000021419, 1.42563735525, 16730.4636895958),
    (0.00000021891, 5.55594302562, 553.5694028424),
    (0.00000017481, 4.56052900359, 135.0650800354),
    (0.00000019925, 5.22208471269, 12168.0026965746),
    (0.0000001986, 5.77470167653, 6309.3741697912),
    (0.000000203, 0.37133792946, 283.8593188652),
    (0.00000014421, 4.19315332546, 242.728603974),
    (0.00000016225, 5.98837722564, 11769.8536931664),
    (0.00000015077, 4.19567181073, 6256.7775301916),
    (0.00000019124, 3.82219996949, 23581.2581773176),
    (0.00000018888, 5.38626880969, 149854.40013480789),
    (0.00000014346, 3.72355084422, 38.0276726358),
    (0.00000017898, 2.21490735647, 13367.9726311066),
    (0.00000012054, 2.62229588349, 955.5997416086),
    (0.00000011287, 0.17739328092, 4164.311989613),
    (0.00000013971, 4.40138139996, 6681.2248533996),
    (0.00000013621, 1.88934471407, 7632.9432596502),
    (0.00000012503, 1.13052412208, 5.5229243074),
    (0.00000010498, 5.35909518669, 1592.5960136328),
    (0.00000010327, 6.19982566125, 6438.4962494256),
    (0.00000012003, 1.003514567, 632.7837393132),
    (0.00000010827, 0.32734520222, 103.0927742186),
    (0.00000010005, 6.0291496328, 5746.271337896),
    (0.00000010523, 0.93871805506, 11926.2544136688),
];

const L1: [Term; 12] = [
    (6283.31966747491, 0.0, 0.0),
    (0.00206058863, 2.67823455584, 6283.0758499914),
    (0.0000430343, 2.63512650414, 12566.1516999828),
    (0.00000425264, 1.59046980729, 3.523118349),
    (0.00000108977, 2.96618001993, 1577.3435424478),
    (0.00000093478, 2.59212835365, 18849.2275499742),
    (0.00000119261, 5.79557487799, 26.2983197998),
    (0.00000072122, 1.13846158196, 529.6909650946),
    (0.00000067768, 1.87472304791, 398.1490034082),
    (0.00000067327, 4.40918235168, 5507.5532386674),
    (0.00000059027, 2.8879703846, 5223.6939198022),
    (0.00000055976, 2.17471680261, 155.4203994342),
];

const L2: [Term; 3] = [
    (0.0005291887, 0.0, 0.0),
    (0.00008719837, 1.07209665242, 6283.0758499914),
    (0.00000309125, 0.86728818832, 12566.1516999828),
];

const B0: [Term; 13] = [
    (0.0000027962, 3.19870156017, 84334.66158130829),
    (0.00000101643, 5.42248619256, 5507.5532386674),
    (0.00000080445, 3.88013204458, 5223.6939198022),
    (0.00000043806, 3.70444689758, 2352.8661537718),
    (0.00000031933, 4.00026369781, 1577.3435424478),
    (0.00000022724, 3.9847383156, 1047.7473117547),
    (0.00000016392, 3.56456119782, 5856.4776591154),
    (0.00000018141, 4.98367470263, 6283.0758499914),
    (0.00000014443, 3.70275614914, 9437.762934887),
    (0.00000014304, 3.41117857525, 10213.285546211),
    (0.00000011246, 4.8282069053, 14143.4952424306),
    (0.000000109, 2.08574562327, 6812.766815086),
    (0.00000010367, 4.05663927946, 71092.88135493269),
];

const R0: [Term; 58] = [
    (1.00013988799, 0.0, 0.0),
    (0.01670699626, 3.09846350771, 6283.0758499914),
    (0.00013956023, 3.0552460962, 12566.1516999828),
    (0.0000308372, 5.19846674381, 77713.7714681205),
    (0.00001628461, 1.17387749012, 5753.3848848968),
    (0.00001575568, 2.84685245825, 7860.4193924392),
    (0.00000924799, 5.45292234084, 11506.7697697936),
    (0.00000542444, 4.56409149777, 3930.2096962196),
    (0.0000047211, 3.66100022149, 5884.9268465832),
    (0.0000032878, 5.89983646482, 5223.6939198022),
    (0.00000345983, 0.96368617687, 5507.5532386674),
    (0.00000306784, 0.29867139512, 5573.1428014331),
    (0.00000174844, 3.01193636534, 18849.2275499742),
    (0.00000243189, 4.27349536153, 11790.6290886588),
    (0.00000211829, 5.84714540314, 1577.3435424478),
    (0.00000185752, 5.02194447178, 10977.078804699),
    (0.00000109835, 5.05510636285, 5486.777843175),
    (0.00000098316, 0.88681311277, 6069.7767545534),
    (0.00000086499, 5.68959778254, 15720.8387848784),
    (0.00000085825, 1.27083733351, 161000.6857376741),
    (0.00000062916, 0.92177108832, 529.6909650946),
    (0.00000057056, 2.01374292014, 83996.84731811189),
    (0.00000064903, 0.27250613787, 17260.1546546904),
    (0.00000049384, 3.24501240359, 2544.3144198834),
    (0.00000055736, 5.24159798933, 71430.69561812909),
    (0.00000042515, 6.01110242003, 6275.9623029906),
    (0.00000046963, 2.57805070386, 775.522611324),
    (0.00000038968, 5.36071738169, 4694.0029547076),
    (0.00000044661, 5.53715807302, 9437.762934887),
    (0.0000003566, 1.67468058995, 12036.4607348882),
    (0.00000031921, 0.18368229781, 5088.6288397668),
    (0.00000031846, 1.77775642085, 398.1490034082),
    (0.00000033193, 0.24370300098, 7084.8967811152),
    (0.00000038245, 2.39255343974, 8827.3902698748),
    (0.00000028464, 1.21344868176, 6286.5989683404),
    (0.0000003749, 0.82952922332, 19651.048481098),
    (0.00000036957, 4.90107591914, 12139.5535091068),
    (0.00000034537, 1.84270693282, 2942.4634232916),
    (0.00000026275, 4.58896850401, 10447.3878396044),
    (0.00000024596, 3.78660875483, 8429.2412664666),
    (0.00000023587, 0.26866117066, 796.2980068164),
    (0.00000027793, 1.89934330904, 6279.5527316424),
    (0.00000023927, 4.99598548138, 5856.4776591154),
    (0.00000020349, 4.65267995431, 2146.1654164752),
    (0.00000023287, 2.80783650928, 14143.4952424306),
    (0.00000022103, 1.95004702988, 3154.6870848956),
    (0.00000019506, 5.38227371393, 2352.8661537718),
    (0.00000017958, 0.19871379385, 6812.766815086),
    (0.00000017174, 4.43315560735, 10213.285546211),
    (0.0000001619, 5.23160507859, 17789.845619785),
    (0.00000017314, 6.15200787916, 16730.4636895958),
    (0.00000013814, 5.18962074032, 8031.0922630584),
    (0.00000018833, 0.67306674027, 149854.40013480789),
    (0.00000018331, 2.25348733734, 23581.2581773176),
    (0.00000013641, 3.68516118804, 4705.7323075436),
    (0.00000013139, 0.65289581324, 13367.9726311066),
    (0.00000010414, 4.33285688538, 11769.8536931664),
    (0.00000010169, 1.59390681369, 4690.4798363586),
];

const R1: [Term; 2] = [
    (0.00103018608, 1.10748969588, 6283.0758499914),
    (0.00001721238, 1.06442301418, 12566.1516999828),
];

const R2: [Term; 1] = [
    (0.00004359385, 5.78455133738, 6283.0758499914),
];

pub(crate) const EARTH: Series = Series {
    longitude: &[&L0, &L1, &L2],
    latitude: &[&B0],
    radius: &[&R0, &R1, &R2],
};
